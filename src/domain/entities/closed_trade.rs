use crate::domain::ports::trading_platform::DealRecord;
use chrono::{DateTime, NaiveDateTime};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// One realized round trip, whichever source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedTrade {
    pub symbol: String,
    pub profit: Decimal,
    /// Terminal-local close time. Reports carry no zone information.
    pub closed_at: Option<NaiveDateTime>,
}

impl ClosedTrade {
    pub fn new(symbol: impl Into<String>, profit: Decimal, closed_at: Option<NaiveDateTime>) -> Self {
        Self {
            symbol: symbol.into(),
            profit,
            closed_at,
        }
    }

    /// `None` when the deal's profit is not a finite number inside the
    /// decimal range (NaN, infinities, or beyond about 7.9e28).
    pub fn from_deal(deal: &DealRecord) -> Option<Self> {
        let profit = Decimal::from_f64(deal.profit)?;
        Some(Self {
            symbol: deal.symbol.clone(),
            profit,
            closed_at: DateTime::from_timestamp(deal.time, 0).map(|dt| dt.naive_utc()),
        })
    }
}
