use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Multiplier turning a ratio into a percentage
pub const HUNDRED: Decimal = dec!(100);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Currency prefix used when formatting amounts
pub const CURRENCY_PREFIX: &str = "₹ ";
