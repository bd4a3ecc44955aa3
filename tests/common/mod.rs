//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use dealscope::config::Settings;
use dealscope::domain::error::AnalysisError;
use dealscope::domain::ports::report_source::ReportSource;
use dealscope::domain::ports::trading_platform::{AccountInfo, DealRecord, HistoryRange, TradingPlatform};
use dealscope::domain::values::deal_entry::DealEntry;
use dealscope::infrastructure::platform::noop::NoPlatform;
use dealscope::DealScope;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory terminal with call counters. `active` counts sessions that
/// were initialized and not yet shut down.
pub struct MockPlatform {
    pub login: u64,
    pub deals: Vec<DealRecord>,
    pub unavailable: bool,
    pub fail_history: bool,
    pub history_delay: Option<Duration>,
    pub shutdowns: AtomicUsize,
    pub history_calls: AtomicUsize,
    pub active: AtomicUsize,
    pub max_active: AtomicUsize,
}

impl MockPlatform {
    pub fn new(login: u64, deals: Vec<DealRecord>) -> Self {
        Self {
            login,
            deals,
            unavailable: false,
            fail_history: false,
            history_delay: None,
            shutdowns: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
        }
    }

    /// A terminal whose history request takes `ms` milliseconds.
    pub fn slow(login: u64, deals: Vec<DealRecord>, ms: u64) -> Self {
        Self {
            history_delay: Some(Duration::from_millis(ms)),
            ..Self::new(login, deals)
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new(0, vec![])
        }
    }

    pub fn shutdown_count(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }

    pub fn active_sessions(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn max_active_sessions(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TradingPlatform for MockPlatform {
    fn name(&self) -> &str {
        "mock"
    }

    async fn initialize(&self) -> Result<(), AnalysisError> {
        if self.unavailable {
            return Err(AnalysisError::FeedUnavailable("terminal not running".into()));
        }
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);
        Ok(())
    }

    async fn account_info(&self) -> Result<AccountInfo, AnalysisError> {
        Ok(AccountInfo {
            login: self.login,
            balance: 5_000.0,
            equity: 5_120.5,
            margin: 100.0,
            margin_free: 5_020.5,
            profit: 120.5,
        })
    }

    async fn history_deals(&self, _range: HistoryRange) -> Result<Vec<DealRecord>, AnalysisError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.history_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_history {
            return Err(AnalysisError::Platform("history request timed out".into()));
        }
        Ok(self.deals.clone())
    }

    async fn shutdown(&self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
    }
}

/// Report text served from memory, whatever path is asked for.
pub struct InMemoryReport(pub String);

impl ReportSource for InMemoryReport {
    fn read(&self, _path: &Path) -> Result<String, AnalysisError> {
        Ok(self.0.clone())
    }
}

pub fn deal(entry: DealEntry, symbol: &str, profit: f64, time: i64) -> DealRecord {
    DealRecord {
        ticket: time as u64,
        entry,
        symbol: symbol.to_string(),
        profit,
        commission: -0.5,
        swap: 0.0,
        time,
    }
}

pub fn settings_in(dir: &Path) -> Settings {
    Settings {
        expected_account: None,
        upload_dir: dir.join("uploads"),
        report_path: dir.join("history.html"),
        bridge_url: None,
        ..Settings::default()
    }
}

pub fn setup(settings: Settings, platform: Arc<dyn TradingPlatform>) -> DealScope {
    DealScope::with_platform(settings, platform)
}

pub fn setup_offline(settings: Settings) -> DealScope {
    DealScope::with_platform(settings, Arc::new(NoPlatform))
}

/// A per-trade row of the positions table in the terminal's export layout.
pub fn position_row(symbol: &str, open: &str, close: &str, profit: &str) -> String {
    format!(
        r##"<tr bgcolor="#FFFFFF" align="right"><td>{open}</td><td>5001</td><td>{symbol}</td><td>buy</td><td class="hidden" colspan="8"></td><td>0.10</td><td>1.08500</td><td></td><td></td><td>{close}</td><td>1.09500</td><td>0.00</td><td>0.00</td><td colspan="2">{profit}</td></tr>"##
    )
}

/// A full report with summary labels and the given positions rows.
pub fn report_html(net_profit: &str, total_trades: &str, wins: &str, losses: &str, rows: &[String]) -> String {
    format!(
        r#"<html><body><table>
<tr><td colspan="13"><div style="font: 10pt Tahoma"><b>Trade History Report</b></div></td></tr>
<tr><th colspan="14"><div><b>Positions</b></div></th></tr>
<tr><td>Time</td><td>Position</td><td>Symbol</td><td>Type</td><td>Volume</td><td>Price</td><td>Time</td><td>Price</td><td>Profit</td></tr>
{rows}
<tr><th colspan="14"><div><b>Results</b></div></th></tr>
<tr align="right"><td nowrap colspan="3">Total Net Profit:</td><td nowrap><b>{net_profit}</b></td>
<td nowrap colspan="3">Gross Profit:</td><td nowrap><b>200.00</b></td></tr>
<tr align="right"><td nowrap colspan="3">Total Trades:</td><td nowrap><b>{total_trades}</b></td></tr>
<tr align="right"><td nowrap colspan="3">Profit Trades (% of total):</td><td nowrap><b>{wins}</b></td>
<td nowrap colspan="3">Loss Trades (% of total):</td><td nowrap><b>{losses}</b></td></tr>
</table></body></html>"#,
        rows = rows.join("\n")
    )
}

pub fn write_report(path: &Path, html: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, html).unwrap();
}

pub fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut raw = vec![0xFF, 0xFE];
    raw.extend(text.encode_utf16().flat_map(|u| u.to_le_bytes()));
    raw
}
