//! Error types for Almanac operations.
//!
//! This module provides the main error type [`AlmanacError`] which wraps
//! various error conditions that can occur while loading a catalog and
//! generating its outline.

use std::io;

use thiserror::Error;

use almanac_parser::error::ParseError;

use crate::outline::OutlineError;

/// The main error type for Almanac operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured error information with source
/// spans. This provides detailed error information that can be used for rich
/// error reporting.
#[derive(Debug, Error)]
pub enum AlmanacError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Outline error: {0}")]
    Outline(#[from] OutlineError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for AlmanacError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl AlmanacError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
