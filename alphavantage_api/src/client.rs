//! HTTP client for the Alpha Vantage query API.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::{
    query::{DailyAdjustedQuery, Query},
    types::QuoteEnvelope,
    user_agent::get_user_agent,
    Error,
};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Alpha Vantage query API.
///
/// Each request builds a fresh `reqwest::Client`, so no connection state is
/// shared between calls.
#[derive(Clone)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://www.alphavantage.co`.
    base_api_url: String,
    api_key: String,
    timeout: Duration,
    user_agent: String,
}

impl Client {
    /// Creates a new client pointing at the production Alpha Vantage API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url("https://www.alphavantage.co", api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: get_user_agent().to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Full request URL for `query`, credential included.
    pub fn url_for(&self, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/query", &self.base_api_url).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        Ok(url)
    }

    async fn get_body(&self, query: &impl Query) -> Result<String, Error> {
        let url = self.url_for(query)?;
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;

        tracing::debug!(function = query.function(), "Requesting {}", redact_key(&url));
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let err = Error::from(e);
                tracing::error!("Failed to get resource: {}", err);
                err
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let err = Error::from(e);
            tracing::error!("Failed to read response body: {}", err);
            err
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    /// Fetches and decodes the daily adjusted series for one symbol.
    ///
    /// Only a body that is not a JSON object is an error here; notice bodies
    /// and missing sections decode to an envelope with those parts absent.
    pub async fn get_daily_adjusted(
        &self,
        query: &DailyAdjustedQuery,
    ) -> Result<QuoteEnvelope, Error> {
        let body = self.get_body(query).await?;
        serde_json::from_str::<QuoteEnvelope>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::warn!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode {
                message: e.to_string(),
                body: snippet,
            }
        })
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
