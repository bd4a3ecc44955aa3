use crate::domain::error::AnalysisError;
use crate::domain::values::deal_entry::DealEntry;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Account metadata as the terminal reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub login: u64,
    pub balance: f64,
    pub equity: f64,
    pub margin: f64,
    pub margin_free: f64,
    /// Floating profit of currently open positions.
    pub profit: f64,
}

/// One deal leg from the terminal's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealRecord {
    #[serde(default)]
    pub ticket: u64,
    pub entry: DealEntry,
    pub symbol: String,
    pub profit: f64,
    #[serde(default)]
    pub commission: f64,
    #[serde(default)]
    pub swap: f64,
    /// Epoch seconds.
    pub time: i64,
}

/// Window of history requested from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl HistoryRange {
    /// Everything since 2020-01-01 up to a day past `now`, so deals stamped by
    /// a server clock running ahead are still included.
    pub fn until(now: NaiveDateTime) -> Self {
        let from = NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Self {
            from,
            to: now + Duration::days(1),
        }
    }
}

/// Connection to a running trading terminal. Not safe for concurrent runs:
/// callers share one session at a time.
#[async_trait]
pub trait TradingPlatform: Send + Sync {
    /// Name of this adapter (e.g., "http_bridge", "none")
    fn name(&self) -> &str;

    async fn initialize(&self) -> Result<(), AnalysisError>;

    async fn account_info(&self) -> Result<AccountInfo, AnalysisError>;

    async fn history_deals(&self, range: HistoryRange) -> Result<Vec<DealRecord>, AnalysisError>;

    /// Release the session. Must be safe to call after any failure.
    async fn shutdown(&self);
}
