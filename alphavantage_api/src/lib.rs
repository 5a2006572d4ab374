//! Thin client for the Alpha Vantage `TIME_SERIES_DAILY_ADJUSTED` endpoint.
//!
//! The response types are decoded leniently: fields the provider leaves out or
//! sends with an unexpected shape come back empty instead of failing the whole
//! envelope. Classifying what an empty result means is left to callers.

mod client;
mod errors;
mod query;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{DailyAdjustedQuery, OutputSize, Query};
pub use self::user_agent::DEFAULT_USER_AGENT;
