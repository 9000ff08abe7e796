//! This crate implements the lexical analysis of Lox source code. The source text is scanned by a
//! small state machine into a stream of classified tokens.
//!
//! The scanner is exposed both as a lazy [`scanner::Scanner`] iterator and as a collected
//! [`token_stream::TokenStream`]. [`token_stream::spawn`] runs a scan on its own thread and hands
//! the tokens over one at a time.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod reader;
pub mod scanner;
pub mod token;
pub mod token_stream;
