use crate::domain::entities::analysis_result::{ChartSeries, EquityPoint, HourProfit, MonthProfit, SymbolProfit};
use crate::domain::entities::closed_trade::ClosedTrade;
use crate::domain::error::AnalysisError;
use crate::domain::values::money::round2;
use crate::domain::values::summary_stats::{checked_sum, SummaryStats};
use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Stats plus chart series for one sequence of closed trades.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub stats: SummaryStats,
    pub charts: ChartSeries,
}

/// Pure computation over closed trades; holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    monthly: bool,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self { monthly: true }
    }

    /// Leaves `monthly_profit` empty. Used for reports, whose per-row dates
    /// are not trusted for calendar bucketing.
    pub fn without_monthly() -> Self {
        Self { monthly: false }
    }

    /// Fails with `Overflow` when any running sum leaves the decimal range.
    pub fn aggregate(&self, trades: &[ClosedTrade]) -> Result<Aggregation, AnalysisError> {
        let ordered = time_ordered(trades);

        let charts = ChartSeries {
            equity_curve: equity_curve(&ordered)?,
            profit_by_symbol: profit_by_symbol(&ordered)?,
            profit_by_hour: profit_by_hour(&ordered)?,
            monthly_profit: if self.monthly {
                monthly_profit(&ordered)?
            } else {
                Vec::new()
            },
        };

        Ok(Aggregation {
            stats: SummaryStats::from_trades(trades)?,
            charts,
        })
    }
}

/// Stable sort by close time; trades without one go last in their
/// original order.
fn time_ordered(trades: &[ClosedTrade]) -> Vec<&ClosedTrade> {
    let mut ordered: Vec<&ClosedTrade> = trades.iter().collect();
    ordered.sort_by(|a, b| match (a.closed_at, b.closed_at) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ordered
}

fn equity_curve(trades: &[&ClosedTrade]) -> Result<Vec<EquityPoint>, AnalysisError> {
    let mut cumulative = Decimal::ZERO;
    trades
        .iter()
        .enumerate()
        .map(|(i, t)| {
            cumulative = checked_sum(cumulative, t.profit, "equity curve")?;
            Ok(EquityPoint {
                x: i + 1,
                y: round2(cumulative),
            })
        })
        .collect()
}

fn profit_by_symbol(trades: &[&ClosedTrade]) -> Result<Vec<SymbolProfit>, AnalysisError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, Decimal)> = Vec::new();
    for t in trades {
        match index.get(t.symbol.as_str()) {
            Some(&i) => totals[i].1 = checked_sum(totals[i].1, t.profit, &t.symbol)?,
            None => {
                index.insert(t.symbol.as_str(), totals.len());
                totals.push((t.symbol.as_str(), t.profit));
            }
        }
    }

    // Stable: ties keep first-seen order
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(totals
        .into_iter()
        .map(|(symbol, profit)| SymbolProfit {
            symbol: symbol.to_string(),
            profit: round2(profit),
        })
        .collect())
}

fn profit_by_hour(trades: &[&ClosedTrade]) -> Result<Vec<HourProfit>, AnalysisError> {
    let mut by_hour: BTreeMap<u32, Decimal> = BTreeMap::new();
    for t in trades {
        if let Some(at) = t.closed_at {
            let slot = by_hour.entry(at.hour()).or_default();
            *slot = checked_sum(*slot, t.profit, "hourly profit")?;
        }
    }
    Ok(by_hour
        .into_iter()
        .map(|(hour, profit)| HourProfit {
            hour,
            profit: round2(profit),
        })
        .collect())
}

fn monthly_profit(trades: &[&ClosedTrade]) -> Result<Vec<MonthProfit>, AnalysisError> {
    let mut by_month: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
    for t in trades {
        if let Some(at) = t.closed_at {
            let slot = by_month.entry((at.year(), at.month())).or_default();
            *slot = checked_sum(*slot, t.profit, "monthly profit")?;
        }
    }
    Ok(by_month
        .into_iter()
        .map(|((year, month), profit)| MonthProfit {
            month: format!("{year:04}-{month:02}"),
            profit: round2(profit),
        })
        .collect())
}
