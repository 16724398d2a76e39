//! Blocking JSON transport for pipeline jobs.
//!
//! A thin wrapper over a blocking HTTP client that decodes responses as
//! JSON and retries transient failures (429/502/503/504 and connection
//! errors) with exponential backoff. Retry policy lives here, in the
//! adapter - callers get either a decoded document or a
//! [`TransportError`], never a partial response.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{Result, TransportError};
