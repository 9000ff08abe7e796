//! Contains the [`Reader`], a backtrackable character cursor over the source text.

use std::ops::Range;

use getset::CopyGetters;

/// Is a cursor reading the source text one character at a time.
///
/// The reader tracks the start of the token being assembled (`start`) and the offset of the next
/// character to read (`pos`). Every character read with [`Iterator::next`] can be put back once
/// with [`Reader::backup`].
///
/// Invariant: `start <= pos <= input.len()`, and both offsets lie on character boundaries.
#[derive(Debug, Clone, CopyGetters)]
#[allow(missing_copy_implementations)]
pub struct Reader<'a> {
    /// Gets the whole source text the reader scans.
    #[get_copy = "pub"]
    input: &'a str,

    /// Gets the byte offset where the pending token starts.
    #[get_copy = "pub"]
    start: usize,

    /// Gets the byte offset of the next character to read.
    #[get_copy = "pub"]
    pos: usize,

    // byte width of the last character read, zero when there is nothing to back up over
    width: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new [`Reader`] positioned at the beginning of the given source text.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// Steps back over the character returned by the latest [`Iterator::next`] call.
    ///
    /// Only one step is remembered: calling this again without reading in between does nothing,
    /// and so does calling it after the reader hit the end of the input.
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Discards the pending input, moving `start` up to `pos`.
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.width = 0;
    }

    /// Consumes the next character if it is `expected`.
    ///
    /// Returns whether the character was consumed.
    pub fn accept(&mut self, expected: char) -> bool {
        if self.next() == Some(expected) {
            return true;
        }

        self.backup();
        false
    }

    /// Consumes characters as long as they satisfy the predicate.
    ///
    /// The character that breaks the run is left unread. The end of the input always breaks the
    /// run.
    pub fn accept_run(&mut self, predicate: impl Fn(char) -> bool) {
        while self.next().is_some_and(&predicate) {}
        self.backup();
    }

    /// Gets the pending input, from `start` up to (but excluding) `pos`.
    #[must_use]
    pub fn pending(&self) -> &'a str { &self.input[self.start..self.pos] }

    /// Gets the byte range of the pending input.
    #[must_use]
    pub fn span(&self) -> Range<usize> { self.start..self.pos }

    /// Returns the byte range of the pending input and starts a new one at `pos`.
    pub fn commit(&mut self) -> Range<usize> {
        let span = self.span();
        self.ignore();
        span
    }

    /// Checks whether every character of the input has been read.
    #[must_use]
    pub fn is_eof(&self) -> bool { self.pos == self.input.len() }
}

impl<'a> Iterator for Reader<'a> {
    type Item = char;

    /// Reads the next character, or returns [`None`] without moving at the end of the input.
    fn next(&mut self) -> Option<char> {
        let Some(character) = self.input[self.pos..].chars().next() else {
            self.width = 0;
            return None;
        };

        self.width = character.len_utf8();
        self.pos += self.width;

        Some(character)
    }
}
