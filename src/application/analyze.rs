use crate::application::aggregate::Aggregator;
use crate::application::live_feed::LiveFeedUseCase;
use crate::application::report_analysis::ReportAnalysisUseCase;
use crate::config::{accepts_report_filename, Settings};
use crate::domain::entities::analysis_result::{AccountSnapshot, AnalysisResult};
use crate::domain::entities::closed_trade::ClosedTrade;
use crate::domain::entities::trade_history::TradeHistory;
use crate::domain::error::AnalysisError;
use crate::domain::ports::trading_platform::{AccountInfo, HistoryRange};
use crate::domain::values::data_source::DataSource;
use crate::domain::values::money::round2_f64;
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

pub const NO_HISTORY_MESSAGE: &str = "No trade history uploaded. Please upload your MT5 report.";
pub const NOT_HTML_MESSAGE: &str = "Please upload an HTML file.";

/// What the dashboard knows about the requester.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    /// Stored name of the requester's uploaded report, if any.
    pub uploaded_file: Option<String>,
    /// Whether the requester may read the live terminal (admins only).
    pub allow_live: bool,
}

/// Picks a data source, runs the matching extraction and reconciles the
/// result into the canonical shape. Its entry points never fail: every
/// problem comes back as an `ERROR` result.
pub struct AnalyzeUseCase {
    live: LiveFeedUseCase,
    report: ReportAnalysisUseCase,
    settings: Settings,
}

impl AnalyzeUseCase {
    pub fn new(live: LiveFeedUseCase, report: ReportAnalysisUseCase, settings: Settings) -> Self {
        Self {
            live,
            report,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Live feed first; the configured report only if the terminal cannot
    /// be reached. A wrong account never falls back.
    pub async fn analyze(&self) -> AnalysisResult {
        let range = HistoryRange::until(Utc::now().naive_utc());
        match self.live.fetch(self.settings.expected_account, range).await {
            Ok(history) => finish(reconcile(history)),
            Err(e) if !e.allows_fallback() => {
                warn!(error = %e, "live feed refused");
                AnalysisResult::failure(e.to_string())
            }
            Err(e) => {
                info!(
                    platform = self.live.platform_name(),
                    reason = %e,
                    "live feed not available, using report file"
                );
                self.from_report(&self.settings.report_path, false)
            }
        }
    }

    /// Analyze a user-supplied report without touching the live feed.
    /// Only `.html` / `.htm` files are accepted.
    pub fn analyze_upload(&self, path: &Path) -> AnalysisResult {
        let is_html = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(accepts_report_filename);
        if !is_html {
            warn!(path = %path.display(), "upload rejected: not an HTML export");
            return AnalysisResult::failure(NOT_HTML_MESSAGE);
        }
        self.from_report(path, true)
    }

    /// Dashboard dispatch: the requester's upload when present, else the
    /// live pipeline for those allowed to see it.
    pub async fn analyze_request(&self, request: &AnalysisRequest) -> AnalysisResult {
        let upload = request
            .uploaded_file
            .as_deref()
            .and_then(|name| self.settings.resolve_upload(name))
            .filter(|path| path.is_file());

        if let Some(path) = upload {
            return self.analyze_upload(&path);
        }
        if request.allow_live {
            return self.analyze().await;
        }
        AnalysisResult::failure(NO_HISTORY_MESSAGE)
    }

    fn from_report(&self, path: &Path, uploaded: bool) -> AnalysisResult {
        match self.report.load(path, uploaded).and_then(reconcile) {
            Ok(result) => result,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "report analysis failed");
                AnalysisResult::failure(e.to_string())
            }
        }
    }
}

fn finish(outcome: Result<AnalysisResult, AnalysisError>) -> AnalysisResult {
    outcome.unwrap_or_else(|e| {
        warn!(error = %e, "live history could not be aggregated");
        AnalysisResult::failure(e.to_string())
    })
}

/// Convert either source's history into the canonical result. Fails only
/// when a profit sum leaves the decimal range.
pub fn reconcile(history: TradeHistory) -> Result<AnalysisResult, AnalysisError> {
    match history {
        TradeHistory::Live { account, deals } => {
            let trades: Vec<ClosedTrade> = deals
                .iter()
                .filter_map(|deal| {
                    let trade = ClosedTrade::from_deal(deal);
                    if trade.is_none() {
                        warn!(
                            ticket = deal.ticket,
                            profit = deal.profit,
                            "deal skipped: profit is not a finite amount"
                        );
                    }
                    trade
                })
                .collect();
            let agg = Aggregator::new().aggregate(&trades)?;
            Ok(AnalysisResult::new(DataSource::Live, &agg.stats, agg.charts).with_account(snapshot(&account)))
        }
        TradeHistory::Report {
            uploaded,
            summary,
            trades,
            diagnostics,
        } => {
            let agg = Aggregator::without_monthly().aggregate(&trades)?;
            let stats = summary.resolve(&agg.stats);
            let source = if uploaded {
                DataSource::Uploaded
            } else {
                DataSource::Report
            };
            Ok(AnalysisResult::new(source, &stats, agg.charts).with_diagnostics(diagnostics))
        }
    }
}

fn snapshot(account: &AccountInfo) -> AccountSnapshot {
    AccountSnapshot {
        balance: round2_f64(account.balance),
        equity: round2_f64(account.equity),
        margin: round2_f64(account.margin),
        free_margin: round2_f64(account.margin_free),
        floating_profit: round2_f64(account.profit),
    }
}
