use crate::domain::error::AnalysisError;
use crate::domain::ports::trading_platform::{AccountInfo, DealRecord, HistoryRange, TradingPlatform};

/// Stand-in for hosts without a trading terminal. Every call reports the
/// platform as unavailable, which sends the pipeline to report mode.
pub struct NoPlatform;

const NOT_CONFIGURED: &str = "no trading terminal configured";

#[async_trait::async_trait]
impl TradingPlatform for NoPlatform {
    fn name(&self) -> &str {
        "none"
    }

    async fn initialize(&self) -> Result<(), AnalysisError> {
        Err(AnalysisError::FeedUnavailable(NOT_CONFIGURED.into()))
    }

    async fn account_info(&self) -> Result<AccountInfo, AnalysisError> {
        Err(AnalysisError::FeedUnavailable(NOT_CONFIGURED.into()))
    }

    async fn history_deals(&self, _range: HistoryRange) -> Result<Vec<DealRecord>, AnalysisError> {
        Err(AnalysisError::FeedUnavailable(NOT_CONFIGURED.into()))
    }

    async fn shutdown(&self) {}
}
