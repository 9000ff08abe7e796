//! Contains all kinds of lexical errors that can occur while scanning the source code.
//!
//! A lexical error never surfaces as a Rust error value: the scanner renders it into the text of
//! an [`crate::token::TokenKind::Error`] token and stops.

use enum_as_inner::EnumAsInner;

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, thiserror::Error,
)]
pub enum Error {
    /// The character does not start any token.
    #[error("unexpected character: {0}")]
    UnexpectedCharacter(char),

    /// The end of the source code was reached inside a string literal.
    #[error("unclosed string")]
    UnclosedString,
}
