//! Contains the [`Scanner`], the state machine that turns the source code into tokens.
//!
//! Each state of the machine visits the [`Reader`], may produce a token, and names the state that
//! runs next. The scan ends when a state produces no successor: after the end of input token or
//! after an error token.

use std::{borrow::Cow, iter::FusedIterator, str::FromStr};

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::{
    error::Error,
    reader::Reader,
    token::{KeywordKind, Token, TokenKind},
};

/// All states of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
enum State {
    /// Between tokens; classifies the next character.
    #[default]
    Code,

    /// After `//`, up to the end of the line.
    Comment,

    /// After the opening `"` of a string literal.
    Quote,

    /// At the first digit of a number literal.
    Number,

    /// At the first character of an identifier or keyword.
    Identifier,
}

/// The result of visiting a state.
#[derive(Debug)]
struct Transition<'a> {
    /// The next state, [`None`] halts the scan.
    state: Option<State>,

    /// The produced token, if any.
    output: Option<Token<'a>>,
}

impl<'a> Transition<'a> {
    /// Moves to the given state without producing a token.
    fn step(state: State) -> Self {
        Self {
            state: Some(state),
            output: None,
        }
    }

    /// Produces a token and moves to the given state.
    fn produce(state: State, token: Token<'a>) -> Self {
        Self {
            state: Some(state),
            output: Some(token),
        }
    }

    /// Produces the last token of the scan.
    fn halt(token: Token<'a>) -> Self {
        Self {
            state: None,
            output: Some(token),
        }
    }
}

/// Makes a token out of the pending input of the reader.
fn emit<'a>(reader: &mut Reader<'a>, kind: TokenKind) -> Token<'a> {
    let text = reader.pending();
    Token::new(kind, Cow::Borrowed(text), reader.commit())
}

/// Makes an error token describing the given error.
fn error<'a>(reader: &mut Reader<'a>, error: Error) -> Token<'a> {
    Token::new(TokenKind::Error, Cow::Owned(error.to_string()), reader.commit())
}

fn is_space(character: char) -> bool { matches!(character, ' ' | '\r' | '\t' | '\n') }

/// Checks whether the character is a decimal digit of any script (general category `Nd`).
fn is_digit(character: char) -> bool {
    get_general_category(character) == GeneralCategory::DecimalNumber
}

/// Checks whether the character is a letter (general categories `L*`) or `_`.
fn is_alpha(character: char) -> bool {
    character == '_'
        || matches!(
            get_general_category(character),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

fn is_alphanumeric(character: char) -> bool { is_alpha(character) || is_digit(character) }

impl State {
    fn visit<'a>(self, reader: &mut Reader<'a>) -> Transition<'a> {
        match self {
            Self::Code => Self::visit_code(reader),
            Self::Comment => Self::visit_comment(reader),
            Self::Quote => Self::visit_quote(reader),
            Self::Number => Self::visit_number(reader),
            Self::Identifier => Self::visit_identifier(reader),
        }
    }

    fn visit_code<'a>(reader: &mut Reader<'a>) -> Transition<'a> {
        let Some(character) = reader.next() else {
            return Transition::halt(emit(reader, TokenKind::EndOfInput));
        };

        let kind = match character {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,

            '!' if reader.accept('=') => TokenKind::BangEqual,
            '!' => TokenKind::Bang,
            '=' if reader.accept('=') => TokenKind::EqualEqual,
            '=' => TokenKind::Equal,
            '<' if reader.accept('=') => TokenKind::LessEqual,
            '<' => TokenKind::Less,
            '>' if reader.accept('=') => TokenKind::GreaterEqual,
            '>' => TokenKind::Greater,

            '/' if reader.accept('/') => return Transition::step(Self::Comment),
            '/' => TokenKind::Slash,

            '"' => return Transition::step(Self::Quote),

            character if is_space(character) => {
                reader.ignore();
                return Transition::step(Self::Code);
            }
            character if is_digit(character) => {
                reader.backup();
                return Transition::step(Self::Number);
            }
            character if is_alpha(character) => {
                reader.backup();
                return Transition::step(Self::Identifier);
            }

            character => {
                return Transition::halt(error(reader, Error::UnexpectedCharacter(character)))
            }
        };

        Transition::produce(Self::Code, emit(reader, kind))
    }

    fn visit_comment<'a>(reader: &mut Reader<'a>) -> Transition<'a> {
        reader.accept_run(|character| character != '\n');
        reader.ignore();

        Transition::step(Self::Code)
    }

    fn visit_quote<'a>(reader: &mut Reader<'a>) -> Transition<'a> {
        match reader.next() {
            None => Transition::halt(error(reader, Error::UnclosedString)),
            Some('"') => Transition::produce(Self::Code, emit(reader, TokenKind::String)),
            Some(_) => Transition::step(Self::Quote),
        }
    }

    fn visit_number<'a>(reader: &mut Reader<'a>) -> Transition<'a> {
        reader.accept_run(is_digit);

        // the fraction may be empty: `12.` is a number
        if reader.accept('.') {
            reader.accept_run(is_digit);
        }

        Transition::produce(Self::Code, emit(reader, TokenKind::Number))
    }

    fn visit_identifier<'a>(reader: &mut Reader<'a>) -> Transition<'a> {
        reader.accept_run(is_alphanumeric);

        let kind = KeywordKind::from_str(reader.pending())
            .map_or(TokenKind::Identifier, TokenKind::Keyword);

        Transition::produce(Self::Code, emit(reader, kind))
    }
}

/// Is an iterator scanning the source code into [`Token`]s, one token per call.
///
/// The last token produced is either a [`TokenKind::EndOfInput`] or a [`TokenKind::Error`]; after
/// that the iterator only returns [`None`].
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)]
pub struct Scanner<'a> {
    reader: Reader<'a>,
    state: Option<State>,
}

impl<'a> Scanner<'a> {
    /// Creates a new [`Scanner`] over the given source code.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            reader: Reader::new(source),
            state: Some(State::default()),
        }
    }

    /// Checks whether the scan has ended.
    #[must_use]
    pub fn is_halted(&self) -> bool { self.state.is_none() }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let transition = self.state?.visit(&mut self.reader);
            self.state = transition.state;

            if let Some(token) = transition.output {
                return Some(token);
            }
        }
    }
}

impl<'a> FusedIterator for Scanner<'a> {}
