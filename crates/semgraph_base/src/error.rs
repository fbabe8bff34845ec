//! Error types with source location tracking.
//!
//! Low-level errors raised while tokenizing or scanning a sentence carry a
//! [`Span`] indicating where in the source text the problem occurred. The
//! pipeline-level errors in `semgraph-core` wrap these with the name of the
//! stage that failed (see `semgraph_core::error::PipelineError`).
//!
//! # Example
//!
//! ```
//! use semgraph_base::{SpannedError, Span, Result};
//!
//! fn require_letters(word: &str, span: Span) -> Result<()> {
//!     if word.chars().all(char::is_alphabetic) {
//!         Ok(())
//!     } else {
//!         Err(SpannedError::new(
//!             format!("'{}' is not a word token", word),
//!             span,
//!         ))
//!     }
//! }
//!
//! let err = require_letters("42", Span::new(7, 9)).unwrap_err();
//! assert!(err.to_string().contains("not a word token"));
//! ```

use crate::span::Span;
use std::fmt;

/// An error annotated with its source location.
///
/// Implements [`std::error::Error`] and [`fmt::Display`]. The display format is:
/// `{message} at {start}..{end}`.
#[derive(Debug, Clone)]
pub struct SpannedError {
    /// Human-readable error description.
    pub message: String,
    /// Location in source where the error occurred.
    pub span: Span,
}

impl SpannedError {
    /// Creates an error with the given message and source location.
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for SpannedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.message, self.span.start, self.span.end)
    }
}

impl std::error::Error for SpannedError {}

/// Alias for `std::result::Result<T, SpannedError>`.
///
/// Use this as the return type for fallible low-level scanning operations.
pub type Result<T> = std::result::Result<T, SpannedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanned_error_display() {
        let err = SpannedError::new("unexpected token after 'the'", Span::new(5, 10));
        let display = format!("{}", err);
        assert!(display.contains("unexpected token after 'the'"));
        assert!(display.contains("5..10"));
    }
}
