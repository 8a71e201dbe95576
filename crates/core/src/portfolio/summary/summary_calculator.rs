use rust_decimal::Decimal;

use crate::portfolio::holdings::Holding;

use super::PortfolioSummary;

/// Sums per-holding figures into a [`PortfolioSummary`].
///
/// Total over any input: an empty slice gives [`PortfolioSummary::zero`].
/// Duplicate symbols are summed as separate lots. Exact decimal addition
/// makes the result independent of input order; sums that leave the
/// `Decimal` range saturate at its bounds.
pub fn aggregate(holdings: &[Holding]) -> PortfolioSummary {
    let (current_value, total_investment, todays_pnl) = holdings.iter().fold(
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        |(current, invested, today), holding| {
            (
                current.saturating_add(holding.current_value()),
                invested.saturating_add(holding.total_investment()),
                today.saturating_add(holding.todays_pnl()),
            )
        },
    );

    PortfolioSummary::new(current_value, total_investment, todays_pnl)
}

impl PortfolioSummary {
    pub fn calculate(holdings: &[Holding]) -> Self {
        aggregate(holdings)
    }
}
