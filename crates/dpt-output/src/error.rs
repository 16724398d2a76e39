//! Error types for file output.

use thiserror::Error;

/// Errors raised while writing output files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// File creation or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record or the schema could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
