use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::portfolio::holdings::Holding;
use crate::portfolio::summary::{aggregate, PortfolioSummary};

/// Holdings from one load together with the summary derived from them.
///
/// Built once and never mutated; a new load produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    holdings: Vec<Holding>,
    summary: PortfolioSummary,
    as_of: DateTime<Utc>,
}

impl PortfolioSnapshot {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self::at(holdings, Utc::now())
    }

    pub fn at(holdings: Vec<Holding>, as_of: DateTime<Utc>) -> Self {
        let summary = aggregate(&holdings);
        Self {
            holdings,
            summary,
            as_of,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn summary(&self) -> &PortfolioSummary {
        &self.summary
    }

    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Bounds-checked access by position.
    pub fn holding(&self, index: usize) -> Option<&Holding> {
        self.holdings.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_snapshot_summary_matches_holdings() {
        let snapshot = PortfolioSnapshot::new(vec![
            Holding::new("A", 2, dec!(10), dec!(8), dec!(9)),
            Holding::new("B", 1, dec!(5), dec!(6), dec!(5)),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.summary(), &aggregate(snapshot.holdings()));
        assert_eq!(snapshot.summary().current_value(), dec!(25));
    }

    #[test]
    fn test_holding_at_is_bounds_checked() {
        let snapshot = PortfolioSnapshot::new(vec![Holding::new(
            "ASHOKLEY",
            3,
            dec!(119.10),
            dec!(106.97),
            dec!(120.00),
        )]);

        assert_eq!(snapshot.holding(0).map(|h| h.symbol.as_str()), Some("ASHOKLEY"));
        assert!(snapshot.holding(1).is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = PortfolioSnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.summary(), &PortfolioSummary::zero());
    }
}
