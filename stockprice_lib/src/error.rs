//! Error types for the price fetcher.

use std::fmt;

use alphavantage_api::types::UpstreamNotice;
use thiserror::Error;

/// Which part of the exchange failed before any response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connect,
    Dns,
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Timeout => write!(f, "timeout"),
            TransportKind::Connect => write!(f, "connection failed"),
            TransportKind::Dns => write!(f, "dns lookup failed"),
            TransportKind::Other => write!(f, "request failed"),
        }
    }
}

/// Errors from a price lookup.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Transport error ({kind}): {message}")]
    Transport { kind: TransportKind, message: String },
    #[error("Upstream returned HTTP {status}")]
    HttpStatus { status: u16, body: String },
    #[error("Upstream notice: {}", .0.message())]
    Upstream(UpstreamNotice),
    #[error("Malformed upstream response: {0}")]
    Malformed(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to run request: {0}")]
    Runtime(String),
}

impl FetchError {
    /// True when the exchange completed but produced no usable price.
    ///
    /// These are the outcomes the lenient string fetch reports as an empty
    /// string rather than an error.
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            FetchError::Upstream(_) | FetchError::Malformed(_) | FetchError::InvalidInput(_)
        )
    }

    pub fn transport_kind(&self) -> Option<TransportKind> {
        match self {
            FetchError::Transport { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<alphavantage_api::Error> for FetchError {
    fn from(e: alphavantage_api::Error) -> Self {
        use alphavantage_api::Error as ApiError;

        let message = e.to_string();
        match e {
            ApiError::Timeout => FetchError::Transport {
                kind: TransportKind::Timeout,
                message,
            },
            ApiError::Connect(_) => FetchError::Transport {
                kind: TransportKind::Connect,
                message,
            },
            ApiError::Dns(_) => FetchError::Transport {
                kind: TransportKind::Dns,
                message,
            },
            ApiError::RequestFailed(_) => FetchError::Transport {
                kind: TransportKind::Other,
                message,
            },
            ApiError::HttpStatus { status, body } => FetchError::HttpStatus { status, body },
            ApiError::Decode { message, .. } => FetchError::Malformed(message),
            ApiError::InvalidUrl(msg) => FetchError::Config(msg),
        }
    }
}
