//! Error types for status records.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while decoding a status line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Empty status line")]
    EmptyLine,

    #[error("Expected at least 3 fields, found {0}")]
    MissingFields(usize),

    #[error("Invalid percent field: {0}")]
    InvalidPercent(String),

    #[error("Invalid elapsed seconds field: {0}")]
    InvalidSeconds(String),

    #[error("Job name must not contain '|', '\\n' or '\\r': {0:?}")]
    InvalidName(String),
}
