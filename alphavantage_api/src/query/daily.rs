use url::Url;

use super::common::{OutputSize, Query};

/// Query for the daily adjusted time series of one symbol.
///
/// The symbol is passed through untouched; the provider decides whether it
/// is a real ticker.
#[derive(Clone, Debug)]
pub struct DailyAdjustedQuery {
    pub symbol: String,
    pub output_size: Option<OutputSize>,
}

impl DailyAdjustedQuery {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            output_size: None,
        }
    }

    pub fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = Some(output_size);
        self
    }
}

impl Query for DailyAdjustedQuery {
    fn function(&self) -> &'static str {
        "TIME_SERIES_DAILY_ADJUSTED"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("function", self.function())
            .append_pair("symbol", &self.symbol);
        if let Some(output_size) = self.output_size {
            url.query_pairs_mut()
                .append_pair("outputsize", &output_size.to_string());
        };
        url
    }
}
