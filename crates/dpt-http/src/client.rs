//! Blocking HTTP client with retry.

use std::thread;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, TransportError};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of attempts for a single request.
const MAX_ATTEMPTS: u32 = 20;

/// Base backoff in seconds; the delay doubles with each retry.
const BACKOFF_FACTOR: f64 = 0.1;

/// Ceiling on a single backoff sleep.
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Statuses that trigger a retry.
const RETRY_STATUSES: [u16; 4] = [429, 502, 503, 504];

/// Blocking HTTP client that decodes JSON responses and retries transient
/// failures.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client with the default timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))?;
        Ok(Self { client })
    }

    /// GET `url` (with optional query parameters) and decode the response
    /// body as JSON.
    pub fn get(&self, url: &str, params: Option<&[(&str, &str)]>) -> Result<Value> {
        self.execute(url, || {
            let mut request = self.client.get(url);
            if let Some(params) = params {
                request = request.query(params);
            }
            request
        })
    }

    /// POST `body` as JSON to `url` and decode the response body as JSON.
    pub fn post(&self, url: &str, body: &Value) -> Result<Value> {
        self.execute(url, || self.client.post(url).json(body))
    }

    /// PUT `body` as JSON to `url` and decode the response body as JSON.
    pub fn put(&self, url: &str, body: &Value) -> Result<Value> {
        self.execute(url, || self.client.put(url).json(body))
    }

    fn execute(&self, url: &str, build: impl Fn() -> RequestBuilder) -> Result<Value> {
        let mut attempt: u32 = 0;
        loop {
            match build().send() {
                Ok(response) if response.status().is_success() => {
                    return response
                        .json::<Value>()
                        .map_err(|err| TransportError::JsonParse(err.to_string()));
                }
                Ok(response) => {
                    let status = response.status();
                    if is_retryable(status) && attempt + 1 < MAX_ATTEMPTS {
                        let delay = backoff_delay(attempt);
                        debug!(%status, url, attempt, ?delay, "retrying request");
                        thread::sleep(delay);
                        attempt += 1;
                        continue;
                    }
                    warn!(%status, url, "request failed");
                    return Err(TransportError::Status {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(err) if (err.is_timeout() || err.is_connect()) && attempt + 1 < MAX_ATTEMPTS => {
                    let delay = backoff_delay(attempt);
                    debug!(url, attempt, error = %err, ?delay, "retrying after connection error");
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => {
                    warn!(url, error = %err, "request failed");
                    return Err(TransportError::Network(err.to_string()));
                }
            }
        }
    }
}

fn is_retryable(status: StatusCode) -> bool {
    RETRY_STATUSES.contains(&status.as_u16())
}

/// Exponential backoff: `BACKOFF_FACTOR * 2^attempt`, capped at
/// [`MAX_BACKOFF`].
fn backoff_delay(attempt: u32) -> Duration {
    let exponent = attempt.min(16) as i32;
    let seconds = BACKOFF_FACTOR * 2f64.powi(exponent);
    Duration::from_secs_f64(seconds).min(MAX_BACKOFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_statuses() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(is_retryable(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable(StatusCode::GATEWAY_TIMEOUT));
        assert!(!is_retryable(StatusCode::NOT_FOUND));
        assert!(!is_retryable(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_retryable(StatusCode::OK));
    }

    #[test]
    fn backoff_doubles_and_caps() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(2), Duration::from_millis(400));
        assert_eq!(backoff_delay(30), MAX_BACKOFF);
    }
}
