// ABOUTME: Currency stripping and price helpers for scraped price strings.
// ABOUTME: Removes symbols/codes, pulls estimate ranges, and offers an opt-in numeric parse.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Symbol used by the artwork shop's price labels.
pub const POUND_SIGN: &str = "£";

/// A digit-grouped amount such as `14,509,999`.
static GROUPED_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:,\d+)+").unwrap());

/// Removes every occurrence of each symbol from `text`.
///
/// Digits, decimal separators and any other text are left alone; callers
/// parse the remainder themselves. Removal repeats until no symbol is
/// left, so the result never contains a symbol and a second call is a
/// no-op.
pub fn strip_currency(text: &str, symbols: &[&str]) -> String {
    let mut result = text.to_string();
    loop {
        let before = result.len();
        for symbol in symbols.iter().filter(|s| !s.is_empty()) {
            if result.contains(symbol) {
                result = result.replace(symbol, "");
            }
        }
        if result.len() == before {
            return result;
        }
    }
}

/// Joins every digit-grouped amount in `text` with `" - "`.
///
/// `"USD 14,509,999 - USD 21,764,999"` becomes `"14,509,999 - 21,764,999"`.
/// Returns an empty string when no grouped amount is present.
pub fn estimate_range(text: &str) -> String {
    GROUPED_NUMBER
        .find_iter(text)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" - ")
}

/// A price string with its currency marker removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceValue(String);

impl PriceValue {
    /// Strips `symbols` from `raw` and trims the result.
    pub fn from_raw(raw: &str, symbols: &[&str]) -> Self {
        PriceValue(strip_currency(raw, symbols).trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the value as a number, dropping `,` and space grouping.
    ///
    /// Returns None when anything other than digits and one `.` remains.
    pub fn amount(&self) -> Option<f64> {
        let digits: String = self
            .0
            .chars()
            .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
            .collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for PriceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PriceValue> for String {
    fn from(value: PriceValue) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_pound_sign() {
        assert_eq!(strip_currency("£1,250", &[POUND_SIGN]), "1,250");
        assert_eq!(strip_currency("£ 95.00", &[POUND_SIGN]), " 95.00");
    }

    #[test]
    fn test_strip_currency_code() {
        assert_eq!(strip_currency("GBP 11,282,500", &["GBP"]), " 11,282,500");
    }

    #[test]
    fn test_absent_symbol_unchanged() {
        assert_eq!(strip_currency("1,250", &[POUND_SIGN]), "1,250");
        assert_eq!(strip_currency("", &["USD"]), "");
    }

    #[test]
    fn test_idempotent_even_when_removal_exposes_symbol() {
        let once = strip_currency("GGBPBP 10", &["GBP"]);
        assert_eq!(once, " 10");
        assert_eq!(strip_currency(&once, &["GBP"]), once);
    }

    #[test]
    fn test_estimate_range() {
        assert_eq!(
            estimate_range("USD 14,509,999 - USD 21,764,999"),
            "14,509,999 - 21,764,999"
        );
        assert_eq!(estimate_range("Estimate on request"), "");
    }

    #[test]
    fn test_price_value_amount() {
        let price = PriceValue::from_raw("£1,250.50", &[POUND_SIGN]);
        assert_eq!(price.as_str(), "1,250.50");
        assert_eq!(price.amount(), Some(1250.5));

        let price = PriceValue::from_raw("GBP 11 282 500", &["GBP"]);
        assert_eq!(price.amount(), Some(11_282_500.0));

        assert_eq!(PriceValue::from_raw("Sold", &[POUND_SIGN]).amount(), None);
    }
}
