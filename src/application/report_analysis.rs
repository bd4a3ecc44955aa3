use crate::application::extract::positions::extract_positions;
use crate::application::extract::summary::extract_summary;
use crate::domain::entities::trade_history::TradeHistory;
use crate::domain::error::AnalysisError;
use crate::domain::ports::report_markup::ReportMarkup;
use crate::domain::ports::report_source::ReportSource;
use std::path::Path;
use std::sync::Arc;

pub struct ReportAnalysisUseCase {
    source: Arc<dyn ReportSource>,
    markup: Arc<dyn ReportMarkup>,
}

impl ReportAnalysisUseCase {
    pub fn new(source: Arc<dyn ReportSource>, markup: Arc<dyn ReportMarkup>) -> Self {
        Self { source, markup }
    }

    /// Decode the report at `path` and pull out its summary and positions.
    pub fn load(&self, path: &Path, uploaded: bool) -> Result<TradeHistory, AnalysisError> {
        let text = self.source.read(path)?;
        let summary = extract_summary(self.markup.as_ref(), &text);
        let (trades, diagnostics) = extract_positions(self.markup.as_ref(), &text);

        Ok(TradeHistory::Report {
            uploaded,
            summary,
            trades,
            diagnostics,
        })
    }
}
