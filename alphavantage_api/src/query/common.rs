//! Shared query infrastructure: the [`Query`] trait and [`OutputSize`].

use std::fmt;
use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// The value of the `function` parameter selecting the endpoint.
    fn function(&self) -> &'static str;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// How much history the provider returns: the latest 100 points or the full series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputSize {
    /// Latest 100 data points. This is the provider default.
    #[default]
    Compact,
    /// Full 20+ year history.
    Full,
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSize::Compact => write!(f, "compact"),
            OutputSize::Full => write!(f, "full"),
        }
    }
}

impl FromStr for OutputSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(OutputSize::Compact),
            "full" => Ok(OutputSize::Full),
            _ => Err(()),
        }
    }
}
