use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the numbers in an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSource {
    Live,
    Report,
    Uploaded,
    Error,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Live => write!(f, "LIVE"),
            DataSource::Report => write!(f, "REPORT"),
            DataSource::Uploaded => write!(f, "UPLOADED"),
            DataSource::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for DataSource {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LIVE" => Ok(DataSource::Live),
            "REPORT" => Ok(DataSource::Report),
            "UPLOADED" => Ok(DataSource::Uploaded),
            "ERROR" => Ok(DataSource::Error),
            _ => Err(format!("Unknown data source: {s}")),
        }
    }
}
