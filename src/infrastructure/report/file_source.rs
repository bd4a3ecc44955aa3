use super::decoder::decode_report;
use crate::config::MAX_REPORT_BYTES;
use crate::domain::error::AnalysisError;
use crate::domain::ports::report_source::ReportSource;
use crate::domain::values::text::normalize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reports read from the local filesystem.
#[derive(Debug, Clone, Copy)]
pub struct FileReportSource {
    max_bytes: u64,
}

impl Default for FileReportSource {
    fn default() -> Self {
        Self::new(MAX_REPORT_BYTES)
    }
}

impl FileReportSource {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    fn read_capped(&self, path: &Path) -> Result<Vec<u8>, AnalysisError> {
        let size = std::fs::metadata(path)?.len();
        if size > self.max_bytes {
            return Err(AnalysisError::ReportTooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        // The file may grow between the size check and the read
        let mut raw = Vec::with_capacity(size as usize);
        File::open(path)?.take(self.max_bytes + 1).read_to_end(&mut raw)?;
        if raw.len() as u64 > self.max_bytes {
            return Err(AnalysisError::ReportTooLarge {
                size: raw.len() as u64,
                limit: self.max_bytes,
            });
        }
        Ok(raw)
    }
}

impl ReportSource for FileReportSource {
    /// Undecodable bytes are dropped, never reported.
    fn read(&self, path: &Path) -> Result<String, AnalysisError> {
        if !path.is_file() {
            return Err(AnalysisError::MissingReport(path.display().to_string()));
        }

        let raw = self.read_capped(path)?;
        let text = normalize(&decode_report(&raw));
        if text.is_empty() {
            return Err(AnalysisError::EmptyReport(path.display().to_string()));
        }

        debug!(path = %path.display(), bytes = raw.len(), chars = text.len(), "report decoded");
        Ok(text)
    }
}
