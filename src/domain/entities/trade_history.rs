use crate::domain::entities::analysis_result::PositionsDiagnostics;
use crate::domain::entities::closed_trade::ClosedTrade;
use crate::domain::ports::trading_platform::{AccountInfo, DealRecord};
use crate::domain::values::summary_stats::ReportSummary;

/// Raw history as delivered by one of the two sources, before it is
/// reconciled into an `AnalysisResult`.
#[derive(Debug, Clone)]
pub enum TradeHistory {
    Live {
        account: AccountInfo,
        deals: Vec<DealRecord>,
    },
    Report {
        /// Supplied by a user rather than found at the configured location.
        uploaded: bool,
        summary: ReportSummary,
        trades: Vec<ClosedTrade>,
        diagnostics: PositionsDiagnostics,
    },
}
