//! Adjusted closing price lookup on top of `alphavantage_api`.
//!
//! [`PriceFetcher`] issues one request per call and either classifies the
//! requested date ([`PriceFetcher::lookup`]) or reduces it to the plain
//! string the foreign export hands out ([`PriceFetcher::fetch`]).

pub mod config;
pub mod error;
pub mod fetcher;
pub mod validation;

pub use alphavantage_api;
pub use alphavantage_api::types::{DailyRecord, UpstreamNotice};
pub use alphavantage_api::OutputSize;

pub use config::FetcherConfig;
pub use error::{FetchError, TransportKind};
pub use fetcher::{PriceFetcher, PriceLookup};
