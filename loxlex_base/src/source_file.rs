#![allow(clippy::future_not_send)]

//! Contains the code related to the source code input.

use std::{
    fmt::{Debug, Display},
    fs::File,
    io::Read,
    path::PathBuf,
    sync::Arc,
};

use getset::Getters;
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Represents the whole source text handed to the scanner.
///
/// The text is either memory-mapped from a file on disk or read in full from an arbitrary reader
/// such as the standard input.
#[derive(Getters)]
pub struct SourceFile {
    source: Source,

    /// Gets the full path to the source file, [`None`] if the source was not read from a file.
    #[get = "pub"]
    full_path: Option<PathBuf>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("len", &self.content().len())
            .finish()
    }
}

enum Source {
    Mapped(MappedSource),
    Owned(String),
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    pub fn create(file: File) -> Result<Self, Error> {
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };
        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                #[allow(clippy::option_if_let_else)]
                if let Some(mmaped) = mapped {
                    std::str::from_utf8(mmaped).map_err(Error::from)
                } else {
                    Ok("")
                }
            },
        }
        .try_build()
    }

    /// Gets the string content of the mapped file.
    #[must_use]
    pub fn content(&self) -> &str { self.borrow_mapped_str() }
}

impl SourceFile {
    fn new(full_path: Option<PathBuf>, source: Source) -> Arc<Self> {
        Arc::new(Self { source, full_path })
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str {
        match &self.source {
            Source::Mapped(mapped) => mapped.content(),
            Source::Owned(string) => string,
        }
    }

    /// Loads the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(file)?;
        Ok(Self::new(Some(path), Source::Mapped(source)))
    }

    /// Reads the whole content of the given reader until the end of the stream.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when reading from the stream.
    /// - [`Error::Utf8Error`]: The bytes read are not valid UTF-8.
    pub fn read(mut reader: impl Read) -> Result<Arc<Self>, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let string = String::from_utf8(bytes).map_err(|error| error.utf8_error())?;
        Ok(Self::new(None, Source::Owned(string)))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("lox")
            .suffix(".lox")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }
}
