use std::{io::Write, path::PathBuf};

use loxlex_base::source_file;

use super::{load_source, write_tokens, Argument, Color, Parser};

fn listing(source: &str) -> String {
    let mut output = Vec::new();
    write_tokens(source, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn listing_format() {
    assert_eq!(
        listing("var x = 12.5;"),
        "Var        var\n\
         Identifier x\n\
         Equal      =\n\
         Number     12.5\n\
         Semicolon  ;\n\
         EOF        \n"
    );
}

#[test]
fn listing_long_names_are_not_truncated() {
    assert_eq!(
        listing(">= \"hi\""),
        "GreaterEqual >=\n\
         String     \"hi\"\n\
         EOF        \n"
    );
}

#[test]
fn listing_ends_at_error() {
    assert_eq!(listing("# x"), "Error      unexpected character: #\n");
}

#[test]
fn parse_arguments() {
    let argument = Argument::parse_from(["loxlex"]);
    assert_eq!(argument.file, None);
    assert_eq!(argument.color, Color::Auto);
    assert_eq!(argument.path(), None);

    let argument = Argument::parse_from(["loxlex", "-"]);
    assert_eq!(argument.path(), None);

    let argument = Argument::parse_from(["loxlex", "--color", "never", "main.lox"]);
    assert_eq!(argument.color, Color::Never);
    assert_eq!(argument.path(), Some(PathBuf::from("main.lox").as_path()));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "print 1;").unwrap();

    let argument = Argument {
        file: Some(file.path().to_path_buf()),
        color: Color::Never,
    };

    let source_file = load_source(&argument).unwrap();
    assert_eq!(source_file.content(), "print 1;");
}

#[test]
fn load_missing_file() {
    let directory = tempfile::tempdir().unwrap();

    let argument = Argument {
        file: Some(directory.path().join("missing.lox")),
        color: Color::Never,
    };

    assert!(matches!(
        load_source(&argument),
        Err(source_file::Error::IoError(..))
    ));
}
