//! Fetcher configuration, read from the environment or built explicitly.

use std::fmt;
use std::time::Duration;

use alphavantage_api::{OutputSize, DEFAULT_USER_AGENT};

pub const API_KEY_VAR: &str = "ALPHA_API_KEY";
pub const BASE_URL_VAR: &str = "ALPHA_BASE_URL";
pub const TIMEOUT_VAR: &str = "ALPHA_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything a [`crate::PriceFetcher`] needs to reach the provider.
#[derive(Clone)]
pub struct FetcherConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub output_size: Option<OutputSize>,
}

impl FetcherConfig {
    /// Production endpoint and defaults with the given credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_size: None,
        }
    }

    /// Reads `ALPHA_API_KEY`, `ALPHA_BASE_URL` and `ALPHA_TIMEOUT_SECS`.
    ///
    /// A missing key is not an error: the provider answers with an
    /// `Information` notice, which surfaces as [`crate::FetchError::Upstream`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FetcherConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("{} is not set; upstream will reject requests", API_KEY_VAR);
        }
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = lookup_u64(&lookup, TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            ..Self::new(String::new())
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = Some(output_size);
        self
    }
}

impl fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("output_size", &self.output_size)
            .finish()
    }
}

fn lookup_u64<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|val| val.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}
