use crate::domain::error::AnalysisError;
use std::path::Path;

/// Where report text comes from. Implementations decode whatever encoding
/// the export used and hand back normalized text.
pub trait ReportSource: Send + Sync {
    /// Fails with `MissingReport` when nothing is at `path` and with
    /// `EmptyReport` when it decodes to blank text.
    fn read(&self, path: &Path) -> Result<String, AnalysisError>;
}
