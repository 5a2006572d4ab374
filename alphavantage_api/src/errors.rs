//! Error types for the API client.

use std::error::Error as StdError;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL or query could not be turned into a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,
    /// The upstream host name could not be resolved.
    #[error("DNS lookup failed: {0}")]
    Dns(String),
    /// The TCP/TLS connection could not be established.
    #[error("Connection failed: {0}")]
    Connect(String),
    /// Any other transport failure (body read, TLS, protocol).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not a JSON object.
    #[error("Failed to decode response: {message}")]
    Decode { message: String, body: String },
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Error::Timeout;
        }
        let detail = error_chain(&e);
        if e.is_connect() {
            // hyper reports resolver failures as connect errors; the only marker is the text
            let lower = detail.to_lowercase();
            if lower.contains("dns error") || lower.contains("failed to lookup address") {
                return Error::Dns(detail);
            }
            return Error::Connect(detail);
        }
        Error::RequestFailed(detail)
    }
}

impl Error {
    /// True for failures where no HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Timeout | Error::Dns(_) | Error::Connect(_) | Error::RequestFailed(_)
        )
    }
}

fn error_chain(e: &reqwest::Error) -> String {
    let mut parts = vec![e.to_string()];
    let mut source = e.source();
    while let Some(inner) = source {
        parts.push(inner.to_string());
        source = inner.source();
    }
    parts.join(": ")
}
