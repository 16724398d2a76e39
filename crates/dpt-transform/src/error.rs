//! Error types for the tree transforms.

use thiserror::Error;

/// Errors raised by the tree transforms.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransformError {
    /// Input nesting exceeded the configured recursion limit.
    ///
    /// Raised before any output is produced; a transform never returns a
    /// partially rewritten tree.
    #[error("maximum nesting depth of {limit} exceeded")]
    DepthLimitExceeded {
        /// The configured depth limit that was exceeded.
        limit: usize,
    },
}

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
