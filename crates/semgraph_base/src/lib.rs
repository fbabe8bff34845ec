#![cfg_attr(docsrs, feature(doc_cfg))]

//! # semgraph-base
//!
//! Pure structural atoms for the semgraph ecosystem.
//!
//! This crate provides the foundational types shared by the tokenizer,
//! dependency parser and graph builder:
//!
//! - [`Interner`]/[`Symbol`] — string interning for O(1) equality on
//!   surface forms, POS tags and hashed feature names.
//! - [`Span`] — byte-offset source location tracking, carried from the
//!   tokenizer through to every node in the final graph.
//! - [`SpannedError`]/[`Result`] — errors annotated with the input range
//!   that triggered them.
//! - [`hash`] — FNV-1a feature hashing and the deterministic content hash
//!   used to build stable IRIs.
//!
//! # Design Principles
//!
//! This crate has **no knowledge of English grammar**. It provides only
//! generic, reusable infrastructure that the tokenizer, parser and graph
//! builder crates build upon.
//!
//! # Example
//!
//! ```
//! use semgraph_base::{Interner, Span};
//!
//! let mut interner = Interner::new();
//! let word = interner.intern("doctor");
//! let span = Span::new(4, 10);
//!
//! assert_eq!(interner.resolve(word), "doctor");
//! assert_eq!(span.len(), 6);
//! ```

pub mod error;
pub mod hash;
pub mod intern;
pub mod span;

pub use error::{Result, SpannedError};
pub use hash::{content_hash12, fnv1a_32};
pub use intern::{Interner, Symbol, SymbolEq};
pub use span::Span;
