use crate::domain::values::data_source::DataSource;
use crate::domain::values::money::{round2, round4};
use crate::domain::values::summary_stats::SummaryStats;
use serde::Serialize;

/// The canonical payload handed to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub data_source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub total_trades: u64,
    pub total_profit: f64,
    pub wins: u64,
    pub losses: u64,
    pub winrate: f64,
    pub equity_curve: Vec<EquityPoint>,
    pub profit_by_symbol: Vec<SymbolProfit>,
    pub profit_by_hour: Vec<HourProfit>,
    pub monthly_profit: Vec<MonthProfit>,
    #[serde(flatten)]
    pub account: Option<AccountSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_debug: Option<PositionsDiagnostics>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityPoint {
    pub x: usize,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolProfit {
    pub symbol: String,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourProfit {
    pub hour: u32,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthProfit {
    pub month: String,
    pub profit: f64,
}

/// Account state at the time of a live-feed read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSnapshot {
    pub balance: f64,
    pub equity: f64,
    pub margin: f64,
    pub free_margin: f64,
    pub floating_profit: f64,
}

/// How much of a report's positions table could be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PositionsDiagnostics {
    pub positions_block_found: bool,
    pub rows_seen: usize,
    pub rows_parsed: usize,
}

/// Chart series produced by the aggregator, already rounded for output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub equity_curve: Vec<EquityPoint>,
    pub profit_by_symbol: Vec<SymbolProfit>,
    pub profit_by_hour: Vec<HourProfit>,
    pub monthly_profit: Vec<MonthProfit>,
}

impl AnalysisResult {
    pub fn new(data_source: DataSource, stats: &SummaryStats, charts: ChartSeries) -> Self {
        Self {
            data_source,
            error: None,
            total_trades: stats.total_trades,
            total_profit: round2(stats.total_profit),
            wins: stats.wins,
            losses: stats.losses,
            winrate: round4(stats.win_rate),
            equity_curve: charts.equity_curve,
            profit_by_symbol: charts.profit_by_symbol,
            profit_by_hour: charts.profit_by_hour,
            monthly_profit: charts.monthly_profit,
            account: None,
            chart_debug: None,
        }
    }

    /// Error-shaped result: zero stats, empty series, message set.
    pub fn failure(message: impl Into<String>) -> Self {
        let mut result = Self::new(DataSource::Error, &SummaryStats::default(), ChartSeries::default());
        result.error = Some(message.into());
        result
    }

    pub fn with_account(mut self, account: AccountSnapshot) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: PositionsDiagnostics) -> Self {
        self.chart_debug = Some(diagnostics);
        self
    }

    pub fn is_error(&self) -> bool {
        self.data_source == DataSource::Error
    }
}
