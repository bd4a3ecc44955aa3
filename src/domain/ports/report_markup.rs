/// A table row from a report's positions section that looks like a trade.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkupRow {
    /// Cell text with tags stripped and whitespace normalized.
    pub cells: Vec<String>,
    /// Every `YYYY.MM.DD HH:MM:SS` token in the row, in document order.
    pub timestamps: Vec<String>,
}

/// Matching strategy over a decoded, normalized report. Keeps the extractors
/// independent of how the markup is actually scanned.
pub trait ReportMarkup: Send + Sync {
    /// The bolded value that follows `label`'s table cell, normalized.
    fn labeled_value(&self, text: &str, label: &str) -> Option<String>;

    /// Candidate trade rows of the positions section, or `None` when the
    /// report has no positions section at all.
    fn position_rows(&self, text: &str) -> Option<Vec<MarkupRow>>;
}
