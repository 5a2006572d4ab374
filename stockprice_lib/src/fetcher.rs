//! Adjusted-close lookup for one symbol on one date.

use std::future::Future;

use alphavantage_api::types::QuoteEnvelope;
use alphavantage_api::{Client, DailyAdjustedQuery};
use chrono::NaiveDate;

use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::validation::{date_key, validate_date_key, validate_symbol};

/// What the provider's series says about the requested date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceLookup {
    /// The adjusted close, exactly as the provider wrote it.
    Price(String),
    /// The series has no entry for the date (weekend, holiday, future, or
    /// outside the returned window).
    NoTradingData,
    /// The date has an entry but no usable adjusted close.
    FieldMissing,
}

impl PriceLookup {
    /// The price, or the empty string for both "no data" outcomes.
    pub fn into_price_string(self) -> String {
        match self {
            PriceLookup::Price(price) => price,
            _ => String::new(),
        }
    }
}

/// Looks up adjusted closing prices.
///
/// Holds no state beyond its configuration; every call issues exactly one
/// request and keeps nothing afterwards.
#[derive(Debug, Clone)]
pub struct PriceFetcher {
    client: Client,
    config: FetcherConfig,
}

impl PriceFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        let client = Client::with_base_url(&config.base_url, config.api_key.clone())
            .with_timeout(config.timeout)
            .with_user_agent(config.user_agent.clone());
        Self { client, config }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::new(FetcherConfig::from_env())
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    fn query(&self, symbol: &str) -> DailyAdjustedQuery {
        let query = DailyAdjustedQuery::new(symbol);
        match self.config.output_size {
            Some(size) => query.with_output_size(size),
            None => query,
        }
    }

    /// The URL a lookup for `symbol` will request, credential included.
    pub fn request_url(&self, symbol: &str) -> Result<String, FetchError> {
        let url = self.client.url_for(&self.query(symbol))?;
        Ok(url.to_string())
    }

    /// Fetches the series for `symbol` and classifies the entry for `date`.
    ///
    /// `date` is a `YYYY-MM-DD` key and is not checked against a calendar.
    pub async fn lookup(&self, symbol: &str, date: &str) -> Result<PriceLookup, FetchError> {
        let symbol = validate_symbol(symbol)?;
        let date = validate_date_key(date)?;

        tracing::debug!(symbol, date, "Looking up adjusted close");
        let envelope = self.client.get_daily_adjusted(&self.query(symbol)).await?;
        let outcome = classify(&envelope, date);
        match &outcome {
            Ok(PriceLookup::Price(price)) => {
                tracing::debug!(symbol, date, price = price.as_str(), "Found adjusted close")
            }
            Ok(other) => tracing::info!(symbol, date, "No adjusted close: {:?}", other),
            Err(FetchError::Upstream(notice)) => {
                tracing::warn!(symbol, date, "Provider notice: {}", notice.message())
            }
            Err(e) => tracing::warn!(symbol, date, "Lookup failed: {}", e),
        }
        outcome
    }

    pub async fn lookup_on(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<PriceLookup, FetchError> {
        self.lookup(symbol, &date_key(date)).await
    }

    /// The adjusted close as a string, empty when there is none.
    ///
    /// Missing dates, missing fields, unreadable bodies and provider notices
    /// all give `Ok("")`. Only failures to complete the exchange (transport
    /// errors, non-success status, bad configuration) are returned as errors.
    pub async fn fetch(&self, symbol: &str, date: &str) -> Result<String, FetchError> {
        collapse(self.lookup(symbol, date).await)
    }

    pub async fn fetch_on(&self, symbol: &str, date: NaiveDate) -> Result<String, FetchError> {
        self.fetch(symbol, &date_key(date)).await
    }

    /// [`PriceFetcher::lookup`] for synchronous callers.
    ///
    /// Runs on a runtime created for this call. Must not be called from
    /// inside an async runtime.
    pub fn lookup_blocking(&self, symbol: &str, date: &str) -> Result<PriceLookup, FetchError> {
        block_on(self.lookup(symbol, date))?
    }

    /// [`PriceFetcher::fetch`] for synchronous callers.
    pub fn fetch_blocking(&self, symbol: &str, date: &str) -> Result<String, FetchError> {
        collapse(self.lookup_blocking(symbol, date))
    }
}

/// Classify the entry for `date` in a decoded envelope.
///
/// A present series wins over any notice the provider may have added.
pub fn classify(envelope: &QuoteEnvelope, date: &str) -> Result<PriceLookup, FetchError> {
    let Some(series) = envelope.time_series() else {
        return Err(match envelope.notice() {
            Some(notice) => FetchError::Upstream(notice),
            None => FetchError::Malformed("response has no daily time series".to_string()),
        });
    };

    let Some(entry) = series.get(date) else {
        return Ok(PriceLookup::NoTradingData);
    };

    match entry.parsed() {
        Some(record) if !record.adjusted_close.trim().is_empty() => {
            Ok(PriceLookup::Price(record.adjusted_close.clone()))
        }
        _ => Ok(PriceLookup::FieldMissing),
    }
}

fn collapse(outcome: Result<PriceLookup, FetchError>) -> Result<String, FetchError> {
    match outcome {
        Ok(lookup) => Ok(lookup.into_price_string()),
        Err(e) if e.is_empty_result() => Ok(String::new()),
        Err(e) => Err(e),
    }
}

fn block_on<F: Future>(future: F) -> Result<F::Output, FetchError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(FetchError::Runtime(
            "blocking lookup called from inside an async runtime".to_string(),
        ));
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| FetchError::Runtime(e.to_string()))?;
    Ok(runtime.block_on(future))
}
