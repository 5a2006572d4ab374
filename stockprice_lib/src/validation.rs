use chrono::NaiveDate;

use crate::error::FetchError;

/// Reject an empty symbol. Anything else is forwarded as given; the
/// provider decides whether it is a ticker.
pub fn validate_symbol(input: &str) -> Result<&str, FetchError> {
    if input.trim().is_empty() {
        return Err(FetchError::InvalidInput("symbol is empty".to_string()));
    }
    Ok(input)
}

/// The date is only a lookup key, so only emptiness is checked.
pub fn validate_date_key(input: &str) -> Result<&str, FetchError> {
    if input.trim().is_empty() {
        return Err(FetchError::InvalidInput("date is empty".to_string()));
    }
    Ok(input)
}

/// Format a calendar date the way the series keys are written.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_passes_through_unchanged() {
        assert_eq!(validate_symbol("AAPL").unwrap(), "AAPL");
        assert_eq!(validate_symbol("BRK.B").unwrap(), "BRK.B");
        assert_eq!(validate_symbol("tsco.lon").unwrap(), "tsco.lon");
    }

    #[test]
    fn symbol_empty() {
        assert!(validate_symbol("").is_err());
        assert!(validate_symbol("   ").is_err());
    }

    #[test]
    fn long_symbol_passes_through() {
        let symbol = "A".repeat(33);
        assert_eq!(validate_symbol(&symbol).unwrap(), symbol);
    }

    #[test]
    fn symbol_with_control_chars_passes_through() {
        assert_eq!(validate_symbol("AA\nPL").unwrap(), "AA\nPL");
    }

    #[test]
    fn date_key_is_not_calendar_checked() {
        assert_eq!(validate_date_key("2024-02-30").unwrap(), "2024-02-30");
        assert!(validate_date_key("").is_err());
    }

    #[test]
    fn date_key_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(date_key(date), "2024-01-02");
    }
}
