//! Safe core of the exports: status codes and outcome mapping.
//!
//! Everything here works on Rust strings so it can be tested without
//! crossing the C boundary.

use stockprice_lib::{FetchError, PriceFetcher, PriceLookup, TransportKind, UpstreamNotice};

/// Result code returned by `stockprice_lookup`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Price = 0,
    NoTradingData = 1,
    FieldMissing = 2,
    UpstreamInvalidCall = 3,
    UpstreamRateLimited = 4,
    UpstreamInformation = 5,
    Malformed = 6,
    HttpStatus = 7,
    Timeout = 8,
    Connect = 9,
    Dns = 10,
    TransportOther = 11,
    InvalidArgument = -1,
    Internal = -2,
}

impl LookupStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&PriceLookup> for LookupStatus {
    fn from(lookup: &PriceLookup) -> Self {
        match lookup {
            PriceLookup::Price(_) => LookupStatus::Price,
            PriceLookup::NoTradingData => LookupStatus::NoTradingData,
            PriceLookup::FieldMissing => LookupStatus::FieldMissing,
        }
    }
}

impl From<&FetchError> for LookupStatus {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Transport { kind, .. } => match kind {
                TransportKind::Timeout => LookupStatus::Timeout,
                TransportKind::Connect => LookupStatus::Connect,
                TransportKind::Dns => LookupStatus::Dns,
                TransportKind::Other => LookupStatus::TransportOther,
            },
            FetchError::HttpStatus { .. } => LookupStatus::HttpStatus,
            FetchError::Upstream(notice) => match notice {
                UpstreamNotice::InvalidCall(_) => LookupStatus::UpstreamInvalidCall,
                UpstreamNotice::RateLimited(_) => LookupStatus::UpstreamRateLimited,
                UpstreamNotice::Information(_) => LookupStatus::UpstreamInformation,
            },
            FetchError::Malformed(_) => LookupStatus::Malformed,
            FetchError::InvalidInput(_) => LookupStatus::InvalidArgument,
            FetchError::Config(_) | FetchError::Runtime(_) => LookupStatus::Internal,
        }
    }
}

/// The lenient price string. Errors are logged and become the empty string.
pub fn price_string(fetcher: &PriceFetcher, ticker: &str, date: &str) -> String {
    match fetcher.fetch_blocking(ticker, date) {
        Ok(price) => price,
        Err(e) => {
            tracing::error!(ticker, date, "Price lookup failed: {}", e);
            String::new()
        }
    }
}

/// The classified outcome with the price (or empty) to hand back.
pub fn lookup_status(fetcher: &PriceFetcher, ticker: &str, date: &str) -> (LookupStatus, String) {
    match fetcher.lookup_blocking(ticker, date) {
        Ok(lookup) => (LookupStatus::from(&lookup), lookup.into_price_string()),
        Err(e) => {
            tracing::warn!(ticker, date, "Price lookup failed: {}", e);
            (LookupStatus::from(&e), String::new())
        }
    }
}
