use super::numbers::{parse_money, parse_report_time};
use crate::domain::entities::analysis_result::PositionsDiagnostics;
use crate::domain::entities::closed_trade::ClosedTrade;
use crate::domain::ports::report_markup::ReportMarkup;
use tracing::debug;

/// Closed trades from the report's positions table, in document order.
pub fn extract_positions(markup: &dyn ReportMarkup, text: &str) -> (Vec<ClosedTrade>, PositionsDiagnostics) {
    let Some(rows) = markup.position_rows(text) else {
        debug!("no positions section in report");
        return (Vec::new(), PositionsDiagnostics::default());
    };

    let mut trades = Vec::new();
    let mut diagnostics = PositionsDiagnostics {
        positions_block_found: true,
        rows_seen: rows.len(),
        rows_parsed: 0,
    };

    for row in &rows {
        // Subtotal rows leave the symbol cell empty
        let symbol = match row.cells.get(2) {
            Some(s) if !s.is_empty() => s,
            _ => continue,
        };
        let Some(profit) = row.cells.last().and_then(|c| parse_money(c)) else {
            continue;
        };
        let closed_at = row.timestamps.last().and_then(|t| parse_report_time(t));

        diagnostics.rows_parsed += 1;
        trades.push(ClosedTrade::new(symbol.as_str(), profit, closed_at));
    }

    debug!(
        rows_seen = diagnostics.rows_seen,
        rows_parsed = diagnostics.rows_parsed,
        "positions extracted"
    );
    (trades, diagnostics)
}
