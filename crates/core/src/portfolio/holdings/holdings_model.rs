use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tickerbook_market_data::RawHolding;

use crate::portfolio::summary::pnl_percentage;

/// One position held by the user.
///
/// Only the five source fields are stored. Every monetary figure is derived
/// on demand, so a `Holding` can never disagree with itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    /// Units held. Sign is whatever the source reported.
    pub quantity: i64,
    /// Last traded price
    pub ltp: Decimal,
    /// Average acquisition price
    pub avg_price: Decimal,
    /// Previous close
    pub close: Decimal,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        quantity: i64,
        ltp: Decimal,
        avg_price: Decimal,
        close: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            ltp,
            avg_price,
            close,
        }
    }

    fn units(&self) -> Decimal {
        Decimal::from(self.quantity)
    }

    // Figures saturate at the `Decimal` bounds instead of panicking.
    // Decoded payloads are range-checked, so only hand-built holdings can
    // reach the bounds.

    /// `ltp * quantity`
    pub fn current_value(&self) -> Decimal {
        self.ltp.saturating_mul(self.units())
    }

    /// `avg_price * quantity`
    pub fn total_investment(&self) -> Decimal {
        self.avg_price.saturating_mul(self.units())
    }

    /// `current_value - total_investment`
    pub fn total_pnl(&self) -> Decimal {
        self.current_value().saturating_sub(self.total_investment())
    }

    /// `(close - ltp) * quantity`
    pub fn todays_pnl(&self) -> Decimal {
        self.close.saturating_sub(self.ltp).saturating_mul(self.units())
    }

    /// Total PnL as a percentage of the investment, or zero when nothing
    /// (or a negative amount) was invested.
    pub fn total_pnl_percentage(&self) -> Decimal {
        pnl_percentage(self.total_pnl(), self.total_investment())
    }
}

impl From<RawHolding> for Holding {
    fn from(raw: RawHolding) -> Self {
        Self {
            symbol: raw.symbol,
            quantity: raw.quantity,
            ltp: raw.ltp,
            avg_price: raw.avg_price,
            close: raw.close,
        }
    }
}
