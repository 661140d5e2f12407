//! Error types for Inkstream operations.
//!
//! Streaming updates never fail. Errors arise only at the edges: reading or
//! writing files, loading configuration, and the strict parse performed when
//! a stream completes.

use std::io;

use thiserror::Error;

use inkstream_parser::error::ParseError;

/// The main error type for Inkstream operations.
///
/// The `Parse` variant keeps the text that failed so diagnostics can be
/// rendered with source snippets.
#[derive(Debug, Error)]
pub enum InkstreamError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}

impl InkstreamError {
    /// Create a new `Parse` error with the associated stream text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
