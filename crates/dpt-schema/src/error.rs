//! Error types for schema deduction.

use thiserror::Error;

/// Errors raised while deducing a schema.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// Schema deduction requires every record to be a JSON object.
    #[error("record {index} is not a JSON object")]
    NonRecordInput {
        /// Zero-based position of the offending record in the input batch.
        index: usize,
    },
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
