// ABOUTME: Sale-date parsing for long human-readable dates.
// ABOUTME: Accepts "day month-name year" (optionally with a comma after the month) and emits ISO dates.

use chrono::NaiveDate;

use crate::error::ExtractError;

/// Day, full or abbreviated month name, year: "11 February 2016".
const LONG_DATE: &str = "%d %B %Y";

/// Same with a comma after the month: "11 February, 2016".
const LONG_DATE_COMMA: &str = "%d %B, %Y";

/// Parses a "day month-name year" date.
///
/// Trailing commas and whitespace are stripped before parsing. Anything
/// else that does not fit the pattern is a [`ExtractError::DateFormat`].
pub fn parse_long_date(s: &str) -> Result<NaiveDate, ExtractError> {
    let trimmed = s
        .trim_start()
        .trim_end_matches(|c: char| c == ',' || c.is_whitespace());

    NaiveDate::parse_from_str(trimmed, LONG_DATE)
        .or_else(|err| NaiveDate::parse_from_str(trimmed, LONG_DATE_COMMA).map_err(|_| err))
        .map_err(|source| ExtractError::DateFormat {
            input: s.to_string(),
            source,
        })
}

/// Reformats a "day month-name year" date as `YYYY-MM-DD`.
pub fn normalize_date(s: &str) -> Result<String, ExtractError> {
    parse_long_date(s).map(|date| date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_after_month() {
        assert_eq!(normalize_date("11 February, 2016").unwrap(), "2016-02-11");
    }

    #[test]
    fn test_trailing_separators_stripped() {
        assert_eq!(normalize_date("11 February 2016, ").unwrap(), "2016-02-11");
        assert_eq!(normalize_date(" 3 March 2020\n").unwrap(), "2020-03-03");
    }

    #[test]
    fn test_returns_naive_date() {
        let date = parse_long_date("29 February 2016").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2016, 2, 29).unwrap());
    }

    #[test]
    fn test_wrong_shape_is_format_error() {
        for input in ["2016-02-11", "February 11 2016", "", "31 February 2016"] {
            let err = normalize_date(input).unwrap_err();
            assert!(
                matches!(err, ExtractError::DateFormat { .. }),
                "expected format error for {input:?}"
            );
        }
    }
}
