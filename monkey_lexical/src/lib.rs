//! This crate implements the lexical analysis phase of the Monkey interpreter. This phase is
//! responsible for turning the source code into a stream of tokens.
//!
//! The [`scanner::Scanner`] produces one [`token::Token`] per call and is the core of the
//! crate; [`token_stream::TokenStream`] runs it over a whole source file, attaching spans and
//! reporting illegal characters as diagnostics.

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
pub mod scanner;
pub mod token;
pub mod token_stream;
