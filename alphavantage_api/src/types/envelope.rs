use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::lenient::{lenient_string, Lenient};
use super::record::DailyRecord;

/// The `"Meta Data"` block of a time-series response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaData {
    #[serde(rename = "1. Information", default, deserialize_with = "lenient_string")]
    pub information: String,
    #[serde(rename = "2. Symbol", default, deserialize_with = "lenient_string")]
    pub symbol: String,
    #[serde(
        rename = "3. Last Refreshed",
        default,
        deserialize_with = "lenient_string"
    )]
    pub last_refreshed: String,
    #[serde(rename = "4. Output Size", default, deserialize_with = "lenient_string")]
    pub output_size: String,
    #[serde(rename = "5. Time Zone", default, deserialize_with = "lenient_string")]
    pub time_zone: String,
}

/// A message the provider sends instead of data, with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamNotice {
    /// `"Error Message"`: unknown symbol or malformed call.
    InvalidCall(String),
    /// `"Note"`: call frequency exceeded.
    RateLimited(String),
    /// `"Information"`: missing/invalid key, daily quota, or premium-only endpoint.
    Information(String),
}

impl UpstreamNotice {
    pub fn message(&self) -> &str {
        match self {
            UpstreamNotice::InvalidCall(msg)
            | UpstreamNotice::RateLimited(msg)
            | UpstreamNotice::Information(msg) => msg,
        }
    }
}

/// Decoded body of a `TIME_SERIES_DAILY_ADJUSTED` response.
///
/// Decoding only fails when the body is not a JSON object. Each per-day
/// record is decoded on its own, so a damaged entry for one date leaves
/// every other date readable.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct QuoteEnvelope {
    #[serde(rename = "Meta Data", default)]
    meta_data: Option<Lenient<MetaData>>,
    #[serde(rename = "Time Series (Daily)", default)]
    time_series: Option<Lenient<BTreeMap<String, Lenient<DailyRecord>>>>,
    #[serde(rename = "Error Message", default)]
    error_message: Option<Lenient<String>>,
    #[serde(rename = "Note", default)]
    note: Option<Lenient<String>>,
    #[serde(rename = "Information", default)]
    information: Option<Lenient<String>>,
}

impl QuoteEnvelope {
    pub fn meta_data(&self) -> Option<&MetaData> {
        self.meta_data.as_ref().and_then(Lenient::parsed)
    }

    /// The per-date mapping, if the response carried one.
    pub fn time_series(&self) -> Option<&BTreeMap<String, Lenient<DailyRecord>>> {
        self.time_series.as_ref().and_then(Lenient::parsed)
    }

    /// The record for `date` (`YYYY-MM-DD`), if present and readable.
    pub fn record(&self, date: &str) -> Option<&DailyRecord> {
        self.time_series()
            .and_then(|series| series.get(date))
            .and_then(Lenient::parsed)
    }

    /// The provider notice carried instead of data, if any.
    pub fn notice(&self) -> Option<UpstreamNotice> {
        let text = |field: &Option<Lenient<String>>| {
            field.as_ref().and_then(Lenient::parsed).cloned()
        };
        if let Some(msg) = text(&self.error_message) {
            return Some(UpstreamNotice::InvalidCall(msg));
        }
        if let Some(msg) = text(&self.note) {
            return Some(UpstreamNotice::RateLimited(msg));
        }
        text(&self.information).map(UpstreamNotice::Information)
    }
}
