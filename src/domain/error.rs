use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Report not found: {0}")]
    MissingReport(String),

    #[error("Report appears empty after decoding: {0}")]
    EmptyReport(String),

    #[error("Report is {size} bytes, limit is {limit}")]
    ReportTooLarge { size: u64, limit: u64 },

    #[error("Profit total out of range: {0}")]
    Overflow(String),

    #[error("Wrong account ({connected}), need {expected}")]
    AccountMismatch { connected: u64, expected: u64 },

    #[error("Trading platform unavailable: {0}")]
    FeedUnavailable(String),

    #[error("Trading platform error: {0}")]
    Platform(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Whether a failed live-feed attempt may be replaced by report mode.
    /// A wrong account is authoritative and must reach the caller as-is.
    pub fn allows_fallback(&self) -> bool {
        !matches!(self, AnalysisError::AccountMismatch { .. })
    }
}
