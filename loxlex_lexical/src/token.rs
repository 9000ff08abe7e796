//! Is a module containing the [`Token`] type and all of its related types.

use std::{borrow::Cow, collections::HashMap, fmt::Display, ops::Range, str::FromStr};

use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Is an enumeration representing the reserved words of the Lox programming language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr,
)]
#[allow(missing_docs)]
pub enum KeywordKind {
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> = {
                let mut map = HashMap::new();

                for keyword in KeywordKind::iter() {
                    map.insert(keyword.as_str(), keyword);
                }

                map
            };
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the spelling of the keyword in the source code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::Fun => "fun",
            Self::For => "for",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
        }
    }
}

/// Is an enumeration of every kind of token the scanner produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    /// The scan failed; the text of the token is the error message.
    Error,

    // single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // one or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // literals
    Identifier,
    String,
    Number,

    Keyword(KeywordKind),

    /// The scan reached the end of the source code.
    EndOfInput,
}

impl TokenKind {
    /// Gets the name of the token kind, as printed in the token listing.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::LeftBrace => "LeftBrace",
            Self::RightBrace => "RightBrace",
            Self::Comma => "Comma",
            Self::Dot => "Dot",
            Self::Minus => "Minus",
            Self::Plus => "Plus",
            Self::Semicolon => "Semicolon",
            Self::Slash => "Slash",
            Self::Star => "Star",
            Self::Bang => "Bang",
            Self::BangEqual => "BangEqual",
            Self::Equal => "Equal",
            Self::EqualEqual => "EqualEqual",
            Self::Greater => "Greater",
            Self::GreaterEqual => "GreaterEqual",
            Self::Less => "Less",
            Self::LessEqual => "LessEqual",
            Self::Identifier => "Identifier",
            Self::String => "String",
            Self::Number => "Number",
            Self::Keyword(keyword) => keyword.into(),
            Self::EndOfInput => "EOF",
        }
    }

    /// Checks whether a token of this kind ends the token stream.
    #[must_use]
    pub fn is_terminal(self) -> bool { matches!(self, Self::Error | Self::EndOfInput) }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.pad(self.name()) }
}

/// Represents a classified piece of the source code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters, new)]
pub struct Token<'a> {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    text: Cow<'a, str>,

    /// Gets the byte range of the source code that the token covers.
    #[get = "pub"]
    span: Range<usize>,
}

impl<'a> Token<'a> {
    /// Gets the text of the token.
    ///
    /// This is the exact source text of the token, the empty string for
    /// [`TokenKind::EndOfInput`], and the error message for [`TokenKind::Error`].
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Detaches the token from the source code it was scanned from.
    #[must_use]
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            text: Cow::Owned(self.text.into_owned()),
            span: self.span,
        }
    }
}

impl<'a> Display for Token<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => f.write_str("EOF"),
            TokenKind::Error => f.write_str(&self.text),
            _ => write!(f, "{:?}", &*self.text),
        }
    }
}
