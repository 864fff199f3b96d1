//! Error types for ip-analyzer.
//!
//! The engine only ever fails while parsing, so it has a single error type,
//! [`FormatError`]. The binary wraps it in [`AppError`] together with the I/O
//! and output failures that can happen around it.

use thiserror::Error;

/// Raised when an address, octet, hextet or prefix cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct FormatError(String);

impl FormatError {
    pub fn new(cause: impl Into<String>) -> Self {
        FormatError(cause.into())
    }

    /// The human-readable cause.
    pub fn cause(&self) -> &str {
        &self.0
    }
}

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input could not be parsed
    #[error("{0}")]
    Format(#[from] FormatError),

    /// No input line was available on stdin
    #[error("No input given")]
    NoInput,

    /// IO error (stdin/stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logger setup failed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
