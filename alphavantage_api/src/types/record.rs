use serde::{Deserialize, Serialize};

use super::lenient::lenient_string;

/// One trading day of the daily adjusted series.
///
/// Every value is kept as the decimal string the provider sent. A field that
/// is absent or has an unexpected shape is the empty string.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyRecord {
    #[serde(rename = "1. open", default, deserialize_with = "lenient_string")]
    pub open: String,
    #[serde(rename = "2. high", default, deserialize_with = "lenient_string")]
    pub high: String,
    #[serde(rename = "3. low", default, deserialize_with = "lenient_string")]
    pub low: String,
    #[serde(rename = "4. close", default, deserialize_with = "lenient_string")]
    pub close: String,
    #[serde(
        rename = "5. adjusted close",
        default,
        deserialize_with = "lenient_string"
    )]
    pub adjusted_close: String,
    #[serde(rename = "6. volume", default, deserialize_with = "lenient_string")]
    pub volume: String,
    #[serde(
        rename = "7. dividend amount",
        default,
        deserialize_with = "lenient_string"
    )]
    pub dividend_amount: String,
    #[serde(
        rename = "8. split coefficient",
        default,
        deserialize_with = "lenient_string"
    )]
    pub split_coefficient: String,
}

impl DailyRecord {
    /// The adjusted close as a float, if the provider sent a parseable number.
    pub fn adjusted_close_value(&self) -> Option<f64> {
        self.adjusted_close.trim().parse().ok()
    }
}
