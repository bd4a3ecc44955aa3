use super::numbers::{parse_int, parse_money, parse_percentage};
use crate::domain::ports::report_markup::ReportMarkup;
use crate::domain::values::summary_stats::ReportSummary;
use rust_decimal::Decimal;

pub const NET_PROFIT_LABEL: &str = "Total Net Profit:";
pub const TOTAL_TRADES_LABEL: &str = "Total Trades:";
pub const PROFIT_TRADES_LABEL: &str = "Profit Trades (% of total):";
pub const LOSS_TRADES_LABEL: &str = "Loss Trades (% of total):";

/// Read the report's own summary block. Fields are looked up independently,
/// so a missing label only leaves that one field empty.
pub fn extract_summary(markup: &dyn ReportMarkup, text: &str) -> ReportSummary {
    let total_profit = markup
        .labeled_value(text, NET_PROFIT_LABEL)
        .and_then(|v| parse_money(&v));
    let total_trades = markup
        .labeled_value(text, TOTAL_TRADES_LABEL)
        .and_then(|v| parse_count(&v));
    let (wins, win_pct) = count_with_percentage(markup, text, PROFIT_TRADES_LABEL);
    let (losses, _) = count_with_percentage(markup, text, LOSS_TRADES_LABEL);

    ReportSummary {
        total_profit,
        total_trades,
        wins,
        win_pct,
        losses,
    }
}

fn count_with_percentage(
    markup: &dyn ReportMarkup,
    text: &str,
    label: &str,
) -> (Option<u64>, Option<Decimal>) {
    match markup.labeled_value(text, label) {
        Some(value) => (parse_count(&value), parse_percentage(&value)),
        None => (None, None),
    }
}

fn parse_count(s: &str) -> Option<u64> {
    parse_int(s).and_then(|n| u64::try_from(n).ok())
}
