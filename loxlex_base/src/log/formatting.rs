//! Contains various kinds of definition for formatting ASCII color/style codes.
//!
//! Escape codes are only written while formatting is enabled, see [`set_enabled`].

use std::{
    fmt::Display,
    sync::atomic::{AtomicBool, Ordering},
};

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turns the escape codes on or off for the whole process.
///
/// Disabled formatting prints the wrapped object as is, which is what a pipe or a file expects.
pub fn set_enabled(enabled: bool) { ENABLED.store(enabled, Ordering::Relaxed); }

/// Returns whether the escape codes are currently written.
#[must_use]
pub fn is_enabled() -> bool { ENABLED.load(Ordering::Relaxed) }

fn write_escaped(
    f: &mut std::fmt::Formatter<'_>,
    code: &str,
    display: &impl Display,
) -> std::fmt::Result {
    if is_enabled() {
        write!(f, "{code}{display}\x1B[0m")
    } else {
        write!(f, "{display}")
    }
}

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> WithStyle<T> {
        WithStyle {
            style: self,
            display,
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable object with a style applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WithStyle<T> {
    /// The style applied to the displayable object.
    pub style: Style,

    /// The displayable object.
    pub display: T,
}

impl<T: Display> Display for WithStyle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = match self.style {
            Style::Bold => "\x1B[1m",
        };

        write_escaped(f, style, &self.display)
    }
}

/// Represents a color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> WithColor<T> {
        WithColor {
            color: self,
            display,
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable object with a color applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WithColor<T> {
    /// The color applied to the displayable object.
    pub color: Color,

    /// The displayable object.
    pub display: T,
}

impl<T: Display> Display for WithColor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let color = match self.color {
            Color::Red => "\x1B[31m",
            Color::Green => "\x1B[32m",
            Color::Yellow => "\x1B[33m",
        };

        write_escaped(f, color, &self.display)
    }
}
