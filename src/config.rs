use crate::domain::error::AnalysisError;
use std::path::{Path, PathBuf};

pub const ENV_ACCOUNT: &str = "DEALSCOPE_ACCOUNT";
pub const ENV_UPLOAD_DIR: &str = "DEALSCOPE_UPLOAD_DIR";
pub const ENV_REPORT: &str = "DEALSCOPE_REPORT";
pub const ENV_BRIDGE_URL: &str = "DEALSCOPE_BRIDGE_URL";
pub const ENV_MAX_REPORT_BYTES: &str = "DEALSCOPE_MAX_REPORT_BYTES";

/// Largest report accepted by default (16 MiB), the dashboard's upload limit.
pub const MAX_REPORT_BYTES: u64 = 16 * 1024 * 1024;

/// Runtime configuration. Passed explicitly into the use cases.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Only this terminal login is accepted by the live feed; `None` accepts any.
    pub expected_account: Option<u64>,
    pub upload_dir: PathBuf,
    /// Report analyzed when the live feed is unavailable.
    pub report_path: PathBuf,
    /// Base URL of the terminal bridge; `None` disables the live feed.
    pub bridge_url: Option<String>,
    /// Reports larger than this are refused before being read.
    pub max_report_bytes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            expected_account: None,
            upload_dir: PathBuf::from("./uploads"),
            report_path: PathBuf::from("./history.html"),
            bridge_url: None,
            max_report_bytes: MAX_REPORT_BYTES,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AnalysisError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AnalysisError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let expected_account = get(ENV_ACCOUNT)
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| AnalysisError::Config(format!("{ENV_ACCOUNT} must be an account number, got {v}")))
            })
            .transpose()?;

        let max_report_bytes = match get(ENV_MAX_REPORT_BYTES) {
            Some(v) => v
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| AnalysisError::Config(format!("{ENV_MAX_REPORT_BYTES} must be a positive size, got {v}")))?,
            None => defaults.max_report_bytes,
        };

        Ok(Self {
            expected_account,
            upload_dir: get(ENV_UPLOAD_DIR).map(PathBuf::from).unwrap_or(defaults.upload_dir),
            report_path: get(ENV_REPORT).map(PathBuf::from).unwrap_or(defaults.report_path),
            bridge_url: get(ENV_BRIDGE_URL),
            max_report_bytes,
        })
    }

    /// Where a user's uploaded report is stored.
    pub fn upload_path_for(&self, user_id: u64) -> PathBuf {
        self.upload_dir.join(format!("user_{user_id}_history.html"))
    }

    /// Resolve a stored upload name inside the upload root. Directory parts
    /// of `name` are discarded.
    pub fn resolve_upload(&self, name: &str) -> Option<PathBuf> {
        Path::new(name).file_name().map(|f| self.upload_dir.join(f))
    }
}

/// Uploads are accepted only as HTML exports.
pub fn accepts_report_filename(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".html") || lower.ends_with(".htm")
}
