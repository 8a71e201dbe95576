use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::constants::HUNDRED;

/// Zero-guarded percentage return.
///
/// Returns `pnl / investment * 100`, or exactly zero when `investment` is
/// not positive. An out-of-range quotient also yields zero rather than
/// panicking.
pub fn pnl_percentage(pnl: Decimal, investment: Decimal) -> Decimal {
    if investment <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    pnl.checked_div(investment)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Aggregate figures over a set of holdings.
///
/// `total_pnl` is not stored: it is always `current_value - total_investment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortfolioSummary {
    current_value: Decimal,
    total_investment: Decimal,
    todays_pnl: Decimal,
}

impl PortfolioSummary {
    pub(crate) fn new(current_value: Decimal, total_investment: Decimal, todays_pnl: Decimal) -> Self {
        Self {
            current_value,
            total_investment,
            todays_pnl,
        }
    }

    /// The all-zero summary of an empty portfolio.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn current_value(&self) -> Decimal {
        self.current_value
    }

    pub fn total_investment(&self) -> Decimal {
        self.total_investment
    }

    pub fn total_pnl(&self) -> Decimal {
        self.current_value.saturating_sub(self.total_investment)
    }

    pub fn todays_pnl(&self) -> Decimal {
        self.todays_pnl
    }

    /// Computed from the summed values, never from per-holding percentages.
    pub fn total_pnl_percentage(&self) -> Decimal {
        pnl_percentage(self.total_pnl(), self.total_investment)
    }
}

impl Serialize for PortfolioSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            current_value: Decimal,
            total_investment: Decimal,
            total_pnl: Decimal,
            todays_pnl: Decimal,
            total_pnl_percentage: Decimal,
        }

        Wire {
            current_value: self.current_value,
            total_investment: self.total_investment,
            total_pnl: self.total_pnl(),
            todays_pnl: self.todays_pnl,
            total_pnl_percentage: self.total_pnl_percentage(),
        }
        .serialize(serializer)
    }
}
