//! Contains the [`TokenStream`] struct and the [`spawn`] function, the two ways to consume a whole
//! scan.

use std::{
    ops::Index,
    sync::mpsc::{self, Receiver},
    thread::{self, JoinHandle},
};

use derive_more::Deref;

use crate::{
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// Is the list of every token scanned from a source code.
///
/// The list always ends with either a [`TokenKind::EndOfInput`] or a [`TokenKind::Error`] token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct TokenStream<'a> {
    #[deref]
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    /// Scans the given source code to the end.
    #[must_use]
    pub fn tokenize(source: &'a str) -> Self {
        Self {
            tokens: Scanner::new(source).collect(),
        }
    }

    /// Gets the [`TokenKind::Error`] token that stopped the scan, if any.
    #[must_use]
    pub fn error(&self) -> Option<&Token<'a>> {
        self.tokens
            .last()
            .filter(|token| token.kind() == TokenKind::Error)
    }

    /// Dissolves this struct into the underlying list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token<'a>> { self.tokens }
}

impl<'a> Index<usize> for TokenStream<'a> {
    type Output = Token<'a>;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

impl<'a> IntoIterator for TokenStream<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter { self.tokens.into_iter() }
}

/// Is the receiving end of a scan running on another thread, see [`spawn`].
///
/// Dropping the handoff stops the scan and waits for the scanning thread to finish.
#[derive(Debug)]
pub struct Handoff {
    receiver: Option<Receiver<Token<'static>>>,
    producer: Option<JoinHandle<()>>,
}

impl Iterator for Handoff {
    type Item = Token<'static>;

    fn next(&mut self) -> Option<Self::Item> { self.receiver.as_ref()?.recv().ok() }
}

impl Drop for Handoff {
    fn drop(&mut self) {
        // the producer blocks in `send` until the receiver is gone
        drop(self.receiver.take());

        if let Some(producer) = self.producer.take() {
            if let Err(panic) = producer.join() {
                if !thread::panicking() {
                    std::panic::resume_unwind(panic);
                }
            }
        }
    }
}

/// Scans the given source code on a new thread, handing the tokens over one at a time.
///
/// The channel between the threads has no buffer: the scanner only moves on once the previous
/// token has been received. Tokens are received in source order, and the last one is either a
/// [`TokenKind::EndOfInput`] or a [`TokenKind::Error`] token.
#[must_use]
pub fn spawn(source: impl Into<String>) -> Handoff {
    let source = source.into();
    let (sender, receiver) = mpsc::sync_channel(0);

    let producer = thread::spawn(move || {
        for token in Scanner::new(&source) {
            if sender.send(token.into_owned()).is_err() {
                break;
            }
        }
    });

    Handoff {
        receiver: Some(receiver),
        producer: Some(producer),
    }
}

#[cfg(test)]
mod tests;
