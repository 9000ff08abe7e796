//! Contains the utilities shared by the property based tests of the workspace.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links
)]

pub mod input;
