use crate::domain::entities::closed_trade::ClosedTrade;
use crate::domain::error::AnalysisError;
use rust_decimal::Decimal;

/// Headline performance numbers for one analysis run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryStats {
    pub total_trades: u64,
    pub total_profit: Decimal,
    pub wins: u64,
    pub losses: u64,
    /// Fraction in `[0, 1]`.
    pub win_rate: Decimal,
}

impl SummaryStats {
    /// Stats computed directly from closed trades. Break-even trades count
    /// toward the total but are neither wins nor losses.
    pub fn from_trades(trades: &[ClosedTrade]) -> Result<Self, AnalysisError> {
        let wins = trades.iter().filter(|t| t.profit > Decimal::ZERO).count() as u64;
        let losses = trades.iter().filter(|t| t.profit < Decimal::ZERO).count() as u64;
        let total_profit = trades
            .iter()
            .try_fold(Decimal::ZERO, |acc, t| checked_sum(acc, t.profit, "total profit"))?;
        Ok(Self {
            total_trades: trades.len() as u64,
            total_profit,
            wins,
            losses,
            win_rate: win_rate(None, wins, losses),
        })
    }
}

/// `a + b`, or `Overflow` naming the running total that left the
/// representable range.
pub fn checked_sum(a: Decimal, b: Decimal, what: &str) -> Result<Decimal, AnalysisError> {
    a.checked_add(b)
        .ok_or_else(|| AnalysisError::Overflow(what.to_string()))
}

/// Summary fields as printed in a report. Each one is independently
/// optional: a report may omit any label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportSummary {
    pub total_profit: Option<Decimal>,
    pub total_trades: Option<u64>,
    pub wins: Option<u64>,
    pub win_pct: Option<Decimal>,
    pub losses: Option<u64>,
}

impl ReportSummary {
    /// Prefer what the report states, filling gaps from the parsed positions.
    pub fn resolve(&self, computed: &SummaryStats) -> SummaryStats {
        let wins = self.wins.unwrap_or(computed.wins);
        let losses = self.losses.unwrap_or(computed.losses);
        SummaryStats {
            total_trades: self.total_trades.unwrap_or(computed.total_trades),
            total_profit: self.total_profit.unwrap_or(computed.total_profit),
            wins,
            losses,
            win_rate: win_rate(self.win_pct, wins, losses),
        }
    }
}

/// A labeled percentage from the source wins over the raw counts;
/// otherwise `wins / (wins + losses)`, or zero with nothing closed.
pub fn win_rate(labeled_pct: Option<Decimal>, wins: u64, losses: u64) -> Decimal {
    if let Some(pct) = labeled_pct {
        return pct / Decimal::ONE_HUNDRED;
    }
    let decided = wins + losses;
    if decided == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(wins) / Decimal::from(decided)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_win_rate_from_counts() {
        assert_eq!(win_rate(None, 7, 3), dec!(0.7));
    }

    #[test]
    fn test_labeled_percentage_takes_precedence() {
        assert_eq!(win_rate(Some(dec!(55.5)), 7, 3), dec!(0.555));
    }

    #[test]
    fn test_win_rate_zero_without_trades() {
        assert_eq!(win_rate(None, 0, 0), Decimal::ZERO);
    }

    #[test]
    fn test_report_summary_fills_gaps_from_positions() {
        let labeled = ReportSummary {
            total_profit: Some(dec!(150.25)),
            wins: Some(7),
            losses: Some(3),
            ..Default::default()
        };
        let computed = SummaryStats {
            total_trades: 2,
            total_profit: dec!(150),
            wins: 2,
            losses: 0,
            win_rate: Decimal::ONE,
        };
        let stats = labeled.resolve(&computed);
        assert_eq!(stats.total_profit, dec!(150.25));
        assert_eq!(stats.total_trades, 2);
        assert_eq!(stats.win_rate, dec!(0.7));
    }

    #[test]
    fn test_from_trades_ignores_break_even() {
        let trades = vec![
            ClosedTrade::new("EURUSD", dec!(10), None),
            ClosedTrade::new("EURUSD", dec!(0), None),
            ClosedTrade::new("GBPUSD", dec!(-4.5), None),
        ];
        let stats = SummaryStats::from_trades(&trades).unwrap();
        assert_eq!(stats.total_trades, 3);
        assert_eq!(stats.total_profit, dec!(5.5));
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.win_rate, dec!(0.5));
    }

    #[test]
    fn test_from_trades_rejects_overflowing_total() {
        let trades = vec![
            ClosedTrade::new("EURUSD", Decimal::MAX, None),
            ClosedTrade::new("EURUSD", Decimal::MAX, None),
        ];
        let err = SummaryStats::from_trades(&trades).unwrap_err();
        assert!(matches!(err, AnalysisError::Overflow(_)));
    }
}
