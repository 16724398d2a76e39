//! Error types for the transport adapter.

use thiserror::Error;

/// Errors raised by the transport adapter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// Connection-level failure (DNS, TLS, timeout) after retries.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response after retries were exhausted.
    #[error("request to {url} failed with status {status}")]
    Status {
        /// HTTP status code of the final response.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;
