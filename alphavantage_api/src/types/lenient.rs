use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

/// A value that decodes as `T` when it can and is otherwise skipped.
///
/// Used for the parts of the response whose shape the provider does not
/// guarantee, so that one bad entry cannot fail the envelope around it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Parsed(T),
    Ignored(IgnoredAny),
}

impl<T> Lenient<T> {
    pub fn parsed(&self) -> Option<&T> {
        match self {
            Lenient::Parsed(value) => Some(value),
            Lenient::Ignored(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Other(IgnoredAny),
}

/// Reads a provider string field. Numbers keep their textual form; null and
/// anything non-scalar become the empty string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
        Scalar::Other(_) => String::new(),
    })
}
