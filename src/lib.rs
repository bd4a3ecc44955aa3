pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze::{AnalysisRequest, AnalyzeUseCase};
use crate::application::live_feed::LiveFeedUseCase;
use crate::application::report_analysis::ReportAnalysisUseCase;
use crate::config::Settings;
use crate::domain::entities::analysis_result::AnalysisResult;
use crate::domain::error::AnalysisError;
use crate::domain::ports::report_markup::ReportMarkup;
use crate::domain::ports::report_source::ReportSource;
use crate::domain::ports::trading_platform::TradingPlatform;
use crate::infrastructure::platform::http_bridge::HttpBridgePlatform;
use crate::infrastructure::platform::noop::NoPlatform;
use crate::infrastructure::report::file_source::FileReportSource;
use crate::infrastructure::report::regex_markup::RegexMarkup;
use std::path::Path;
use std::sync::Arc;

pub struct DealScope {
    analyze_uc: AnalyzeUseCase,
}

impl DealScope {
    /// Configure from `DEALSCOPE_*` environment variables.
    pub fn new() -> Result<Self, AnalysisError> {
        let settings = Settings::from_env()?;

        let platform: Arc<dyn TradingPlatform> = match settings.bridge_url.as_deref() {
            Some(url) => Arc::new(HttpBridgePlatform::new(url)),
            None => Arc::new(NoPlatform),
        };

        Ok(Self::with_platform(settings, platform))
    }

    /// Filesystem reports and the regex markup scanner, with `platform`
    /// as the live feed.
    pub fn with_platform(settings: Settings, platform: Arc<dyn TradingPlatform>) -> Self {
        let source = Arc::new(FileReportSource::new(settings.max_report_bytes));
        Self::with_adapters(settings, platform, source, Arc::new(RegexMarkup::new()))
    }

    pub fn with_adapters(
        settings: Settings,
        platform: Arc<dyn TradingPlatform>,
        source: Arc<dyn ReportSource>,
        markup: Arc<dyn ReportMarkup>,
    ) -> Self {
        Self {
            analyze_uc: AnalyzeUseCase::new(
                LiveFeedUseCase::new(platform),
                ReportAnalysisUseCase::new(source, markup),
                settings,
            ),
        }
    }

    pub fn settings(&self) -> &Settings {
        self.analyze_uc.settings()
    }

    // Delegating methods
    pub async fn analyze(&self) -> AnalysisResult {
        self.analyze_uc.analyze().await
    }

    pub fn analyze_upload(&self, path: impl AsRef<Path>) -> AnalysisResult {
        self.analyze_uc.analyze_upload(path.as_ref())
    }

    pub async fn analyze_request(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.analyze_uc.analyze_request(request).await
    }
}
