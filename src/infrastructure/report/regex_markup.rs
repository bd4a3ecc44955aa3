use crate::domain::values::text::normalize;
use crate::domain::ports::report_markup::{MarkupRow, ReportMarkup};
use regex::Regex;
use std::sync::LazyLock;

static POSITIONS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<b>\s*Positions\s*</b>").expect("static pattern"));
static RESULTS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<b>\s*Results\s*</b>").expect("static pattern"));
static TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr>").expect("static pattern"));
static TABLE_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td>").expect("static pattern"));
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4}\.\d{2}\.\d{2} \d{2}:\d{2}:\d{2})\b").expect("static pattern")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static pattern"));

/// Minimum cells in a per-trade row of the positions table.
const MIN_TRADE_CELLS: usize = 6;

/// `ReportMarkup` over the terminal's HTML export, using regular expressions.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexMarkup;

impl RegexMarkup {
    pub fn new() -> Self {
        Self
    }
}

impl ReportMarkup for RegexMarkup {
    fn labeled_value(&self, text: &str, label: &str) -> Option<String> {
        let pattern = format!(r"(?is){}\s*</td>.*?<b>\s*([^<]+?)\s*</b>", regex::escape(label));
        let re = Regex::new(&pattern).ok()?;
        let caps = re.captures(text)?;
        Some(normalize(caps.get(1)?.as_str()))
    }

    fn position_rows(&self, text: &str) -> Option<Vec<MarkupRow>> {
        let block = positions_block(text)?;

        let rows = TABLE_ROW
            .captures_iter(block)
            .filter_map(|caps| caps.get(1))
            .map(|inner| inner.as_str())
            .filter(|inner| inner.contains(r#"colspan="2""#) || inner.contains("colspan='2'"))
            .filter_map(|inner| {
                let timestamps: Vec<String> = TIMESTAMP
                    .find_iter(inner)
                    .map(|m| m.as_str().to_string())
                    .collect();
                if timestamps.is_empty() {
                    return None;
                }

                let cells: Vec<String> = TABLE_CELL
                    .captures_iter(inner)
                    .filter_map(|c| c.get(1))
                    .map(|c| strip_tags(c.as_str()))
                    .collect();
                if cells.len() < MIN_TRADE_CELLS {
                    return None;
                }

                Some(MarkupRow { cells, timestamps })
            })
            .collect();

        Some(rows)
    }
}

/// The slice from the "Positions" heading up to the "Results" heading, or to
/// the end of the text when no results section follows.
fn positions_block(text: &str) -> Option<&str> {
    let start = POSITIONS_HEADING.find(text)?.start();
    let tail = &text[start..];
    match RESULTS_HEADING.find(tail) {
        Some(end) => Some(&tail[..end.start()]),
        None => Some(tail),
    }
}

fn strip_tags(html: &str) -> String {
    normalize(&TAG.replace_all(html, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade_row(symbol: &str, open: &str, close: &str, profit: &str) -> String {
        format!(
            r#"<tr><td>{open}</td><td>1001</td><td>{symbol}</td><td>buy</td><td colspan="2">0.10</td><td>1.1000</td><td>{close}</td><td>1.1100</td><td><b>{profit}</b></td></tr>"#
        )
    }

    #[test]
    fn test_labeled_value() {
        let text = "<td>Total Trades:</td> <td nowrap><b> 42 </b></td>";
        assert_eq!(RegexMarkup.labeled_value(text, "Total Trades:").as_deref(), Some("42"));
    }

    #[test]
    fn test_labeled_value_case_insensitive_and_escaped() {
        let text = "<td>profit trades (% of total):</td><td><b>7 (70.00%)</b></td>";
        assert_eq!(
            RegexMarkup.labeled_value(text, "Profit Trades (% of total):").as_deref(),
            Some("7 (70.00%)")
        );
    }

    #[test]
    fn test_labeled_value_absent() {
        assert!(RegexMarkup.labeled_value("<td>Balance:</td><b>1</b>", "Total Trades:").is_none());
    }

    #[test]
    fn test_no_positions_heading() {
        assert!(RegexMarkup.position_rows("<table><tr><td>x</td></tr></table>").is_none());
    }

    #[test]
    fn test_rows_limited_to_positions_block() {
        let text = format!(
            "<b>Orders</b>{}<b>Positions</b>{}<b>Results</b>{}",
            trade_row("AAA", "2024.01.01 09:00:00", "2024.01.01 09:30:00", "1.00"),
            trade_row("EURUSD", "2024.01.02 09:00:00", "2024.01.02 10:15:00", "100.00"),
            trade_row("BBB", "2024.01.03 09:00:00", "2024.01.03 09:30:00", "2.00"),
        );
        let rows = RegexMarkup.position_rows(&text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[2], "EURUSD");
        assert_eq!(rows[0].cells.last().unwrap(), "100.00");
        assert_eq!(rows[0].timestamps, vec!["2024.01.02 09:00:00", "2024.01.02 10:15:00"]);
    }

    #[test]
    fn test_structural_filter() {
        let no_colspan = "<tr><td>2024.01.02 09:00:00</td><td>1</td><td>X</td><td>buy</td><td>1</td><td>2</td></tr>";
        let no_timestamp = r#"<tr><td>today</td><td>1</td><td>X</td><td>buy</td><td colspan="2">1</td><td>2</td></tr>"#;
        let too_few_cells = r#"<tr><td colspan="2">2024.01.02 09:00:00</td><td>X</td><td>5</td></tr>"#;
        let text = format!("<b>Positions</b>{no_colspan}{no_timestamp}{too_few_cells}");
        assert!(RegexMarkup.position_rows(&text).unwrap().is_empty());
    }

    #[test]
    fn test_single_quoted_colspan_accepted() {
        let row = "<tr><td>2024.01.02 09:00:00</td><td>1</td><td>X</td><td colspan='2'>buy</td><td>1</td><td>2.5</td></tr>";
        let text = format!("<b> positions </b>{row}");
        assert_eq!(RegexMarkup.position_rows(&text).unwrap().len(), 1);
    }
}
