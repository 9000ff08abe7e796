//! Contains the command line front end of the scanner: reads the source code, scans it, and lists
//! the tokens on the standard output.

use std::{
    fs::File,
    io::{self, BufWriter, IsTerminal, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use loxlex_base::{
    log::{formatting, Message, Severity},
    source_file::{self, SourceFile},
};
use loxlex_lexical::scanner::Scanner;

/// When to color the messages printed to the standard error stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, clap::ValueEnum)]
pub enum Color {
    /// Color only when the standard error stream is a terminal.
    #[default]
    Auto,

    /// Always color.
    Always,

    /// Never color.
    Never,
}

impl Color {
    fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stderr().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "loxlex",
    about = "Scans Lox source code and lists its tokens.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The file to scan; the standard input is scanned when omitted or `-`.
    pub file: Option<PathBuf>,

    /// When to color diagnostic messages.
    #[clap(long, value_enum, default_value_t = Color::Auto)]
    pub color: Color,
}

impl Argument {
    /// Gets the path of the file to scan, [`None`] for the standard input.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

/// Loads the source code named by the arguments.
///
/// # Errors
/// Returns the error that occurred while opening or reading the source.
pub fn load_source(argument: &Argument) -> Result<Arc<SourceFile>, source_file::Error> {
    match argument.path() {
        Some(path) => SourceFile::load(File::open(path)?, path.to_path_buf()),
        None => SourceFile::read(io::stdin().lock()),
    }
}

/// Scans the source code and writes one line per token: the token kind padded to ten columns,
/// then the token text.
///
/// # Errors
/// Returns the error that occurred while writing.
pub fn write_tokens(source: &str, output: impl Write) -> io::Result<()> {
    let mut output = BufWriter::new(output);

    for token in Scanner::new(source) {
        writeln!(output, "{:<10} {}", token.kind(), token.text())?;
    }

    output.flush()
}

fn report(name: impl std::fmt::Display, error: impl std::fmt::Display) -> ExitCode {
    eprintln!(
        "{}",
        Message::new(Severity::Error, format!("{name}: {error}"))
    );
    ExitCode::FAILURE
}

/// Runs the program with the given arguments.
///
/// A lexical error is listed like any other token and doesn't fail the run; only failing to read
/// the source or to write the listing does.
pub fn run(argument: &Argument) -> ExitCode {
    formatting::set_enabled(argument.color.enabled());

    let source_file = match load_source(argument) {
        Ok(source_file) => source_file,
        Err(error) => {
            let name = argument
                .path()
                .map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string());

            return report(name, error);
        }
    };

    if let Err(error) = write_tokens(source_file.content(), io::stdout().lock()) {
        return report("<stdout>", error);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests;
