//! Error types for DML generation.

use thiserror::Error;

/// Errors raised while generating DML.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DmlError {
    /// `INSERT`/`UPDATE` payloads must be JSON objects mapping columns to
    /// values.
    #[error("DML payload is not a JSON object")]
    NonRecordInput,
}

/// Result type alias for DML generation.
pub type Result<T> = std::result::Result<T, DmlError>;
