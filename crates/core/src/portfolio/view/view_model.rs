use rust_decimal::Decimal;
use serde::Serialize;

use crate::portfolio::holdings::Holding;
use crate::portfolio::summary::PortfolioSummary;
use crate::utils::formatting::{to_currency_string, to_percentage_string};

/// One row of the holdings list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub symbol: String,
    pub quantity: i64,
    pub ltp: String,
    pub total_pnl: String,
    pub is_pnl_positive: bool,
}

impl From<&Holding> for HoldingRow {
    fn from(holding: &Holding) -> Self {
        let pnl = holding.total_pnl();
        Self {
            symbol: holding.symbol.clone(),
            quantity: holding.quantity,
            ltp: to_currency_string(holding.ltp),
            total_pnl: to_currency_string(pnl),
            is_pnl_positive: pnl >= Decimal::ZERO,
        }
    }
}

/// Formatted portfolio totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub current_value: String,
    pub total_investment: String,
    pub todays_pnl: String,
    pub total_pnl: String,
    pub total_pnl_percentage: String,
    pub is_pnl_positive: bool,
    pub is_todays_pnl_positive: bool,
}

impl SummaryView {
    /// Placeholder shown before any holdings are loaded: zero amounts, and
    /// neither PnL flag set.
    pub fn unloaded() -> Self {
        Self {
            is_pnl_positive: false,
            is_todays_pnl_positive: false,
            ..Self::from(&PortfolioSummary::zero())
        }
    }
}

impl From<&PortfolioSummary> for SummaryView {
    fn from(summary: &PortfolioSummary) -> Self {
        Self {
            current_value: to_currency_string(summary.current_value()),
            total_investment: to_currency_string(summary.total_investment()),
            todays_pnl: to_currency_string(summary.todays_pnl()),
            total_pnl: to_currency_string(summary.total_pnl()),
            total_pnl_percentage: to_percentage_string(summary.total_pnl_percentage()),
            is_pnl_positive: summary.total_pnl() >= Decimal::ZERO,
            is_todays_pnl_positive: summary.todays_pnl() >= Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_holding_row_formats_values() {
        let holding = Holding::new("HDFC", 7, dec!(2497.20), dec!(2713.91), dec!(2500.00));
        let row = HoldingRow::from(&holding);

        assert_eq!(row.symbol, "HDFC");
        assert_eq!(row.quantity, 7);
        assert_eq!(row.ltp, "₹ 2,497.20");
        assert_eq!(row.total_pnl, "-₹ 1,516.97");
        assert!(!row.is_pnl_positive);
    }

    #[test]
    fn test_break_even_counts_as_positive() {
        let holding = Holding::new("FLAT", 4, dec!(10), dec!(10), dec!(10));
        assert!(HoldingRow::from(&holding).is_pnl_positive);
    }

    #[test]
    fn test_summary_view() {
        let holdings = vec![
            Holding::new("ASHOKLEY", 3, dec!(119.10), dec!(106.97), dec!(120.00)),
            Holding::new("INDHOTEL", 50, dec!(142.75), dec!(156.69), dec!(143.00)),
        ];
        let view = SummaryView::from(&PortfolioSummary::calculate(&holdings));

        // current 357.30 + 7137.50, invested 320.91 + 7834.50
        assert_eq!(view.current_value, "₹ 7,494.80");
        assert_eq!(view.total_investment, "₹ 8,155.41");
        assert_eq!(view.total_pnl, "-₹ 660.61");
        assert_eq!(view.todays_pnl, "₹ 15.20");
        assert_eq!(view.total_pnl_percentage, "(-8.10%)");
        assert!(!view.is_pnl_positive);
        assert!(view.is_todays_pnl_positive);
    }

    #[test]
    fn test_unloaded_summary_view_has_no_positive_flags() {
        let view = SummaryView::unloaded();
        assert_eq!(view.current_value, "₹ 0.00");
        assert_eq!(view.total_pnl, "₹ 0.00");
        assert!(!view.is_pnl_positive);
        assert!(!view.is_todays_pnl_positive);
    }

    #[test]
    fn test_empty_summary_view() {
        let view = SummaryView::from(&PortfolioSummary::zero());
        assert_eq!(view.current_value, "₹ 0.00");
        assert_eq!(view.total_pnl_percentage, "(0.00%)");
        assert!(view.is_pnl_positive);
        assert!(view.is_todays_pnl_positive);
    }
}
