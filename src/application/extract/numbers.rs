use chrono::NaiveDateTime;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::domain::values::text::normalize;

static FIRST_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").expect("static pattern"));
static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([-+]?\d+(?:\.\d+)?)%\)").expect("static pattern"));

/// Format of every timestamp in a terminal report.
pub const REPORT_TIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

fn strip_separators(s: &str) -> String {
    normalize(s).replace([' ', ','], "")
}

/// Monetary amount such as `"1 234.50"` or `"-1,234.50"`. Anything left after
/// dropping separators must be a valid decimal.
pub fn parse_money(s: &str) -> Option<Decimal> {
    let cleaned = strip_separators(s);
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// First signed integer in the text, so `"7 (70.00%)"` gives `7`.
pub fn parse_int(s: &str) -> Option<i64> {
    let cleaned = strip_separators(s);
    FIRST_INT.find(&cleaned)?.as_str().parse().ok()
}

/// Parenthesized percentage, as in `"7 (70.00%)"`.
pub fn parse_percentage(s: &str) -> Option<Decimal> {
    let caps = PERCENTAGE.captures(s)?;
    Decimal::from_str(caps.get(1)?.as_str().trim_start_matches('+')).ok()
}

pub fn parse_report_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&normalize(s), REPORT_TIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("150.25"), Some(dec!(150.25)));
        assert_eq!(parse_money(" -1 234.50 "), Some(dec!(-1234.50)));
        assert_eq!(parse_money("12,345.6"), Some(dec!(12345.6)));
        assert_eq!(parse_money("1\u{a0}000"), Some(dec!(1000)));
    }

    #[test]
    fn test_parse_money_rejects_annotations() {
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("n/a"), None);
        assert_eq!(parse_money("100.00 USD"), None);
    }

    #[test]
    fn test_parse_int_takes_first_integer() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("7 (70.00%)"), Some(7));
        assert_eq!(parse_int("1,024"), Some(1024));
        assert_eq!(parse_int("trades: -3"), Some(-3));
        assert_eq!(parse_int("none"), None);
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("7 (70.00%)"), Some(dec!(70.00)));
        assert_eq!(parse_percentage("3 (+12.5%)"), Some(dec!(12.5)));
        assert_eq!(parse_percentage("7"), None);
    }

    #[test]
    fn test_parse_report_time() {
        let t = parse_report_time("2024.03.05 14:07:09").unwrap();
        assert_eq!(t.to_string(), "2024-03-05 14:07:09");
        assert!(parse_report_time("2024-03-05 14:07:09").is_none());
    }
}
