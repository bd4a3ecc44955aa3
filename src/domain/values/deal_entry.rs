use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a deal relative to its position. The platform reports a
/// round trip as an `In` leg and an `Out` leg; only `Out` realizes profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum DealEntry {
    In,
    Out,
    InOut,
    OutBy,
    Unknown(i64),
}

impl DealEntry {
    pub fn is_exit(&self) -> bool {
        matches!(self, DealEntry::Out)
    }
}

impl From<i64> for DealEntry {
    fn from(code: i64) -> Self {
        match code {
            0 => DealEntry::In,
            1 => DealEntry::Out,
            2 => DealEntry::InOut,
            3 => DealEntry::OutBy,
            other => DealEntry::Unknown(other),
        }
    }
}

impl From<DealEntry> for i64 {
    fn from(entry: DealEntry) -> Self {
        match entry {
            DealEntry::In => 0,
            DealEntry::Out => 1,
            DealEntry::InOut => 2,
            DealEntry::OutBy => 3,
            DealEntry::Unknown(code) => code,
        }
    }
}

impl fmt::Display for DealEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealEntry::In => write!(f, "in"),
            DealEntry::Out => write!(f, "out"),
            DealEntry::InOut => write!(f, "inout"),
            DealEntry::OutBy => write!(f, "out_by"),
            DealEntry::Unknown(code) => write!(f, "unknown({code})"),
        }
    }
}
