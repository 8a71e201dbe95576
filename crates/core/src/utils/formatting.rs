//! Display strings for monetary amounts and percentages.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_PREFIX, DISPLAY_DECIMAL_PRECISION};

fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Inserts `,` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats `value` as `₹ 1,234.50`; negatives as `-₹ 1,234.50`.
///
/// A value that rounds to zero renders unsigned.
pub fn to_currency_string(value: Decimal) -> String {
    let rounded = round_for_display(value);
    let precision = DISPLAY_DECIMAL_PRECISION as usize;
    let plain = format!("{:.*}", precision, rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_PREFIX,
        group_thousands(whole),
        fraction
    )
}

/// Formats `value` (already in percent) as `(12.34%)`.
pub fn to_percentage_string(value: Decimal) -> String {
    let rounded = round_for_display(value);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("({:.*}%)", DISPLAY_DECIMAL_PRECISION as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(to_currency_string(dec!(1234.5)), "₹ 1,234.50");
        assert_eq!(to_currency_string(dec!(26336.2)), "₹ 26,336.20");
        assert_eq!(to_currency_string(dec!(1234567.891)), "₹ 1,234,567.89");
        assert_eq!(to_currency_string(dec!(999.99)), "₹ 999.99");
        assert_eq!(to_currency_string(dec!(100000)), "₹ 100,000.00");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(to_currency_string(dec!(-1234.5)), "-₹ 1,234.50");
        assert_eq!(to_currency_string(dec!(-1973.16)), "-₹ 1,973.16");
    }

    #[test]
    fn test_currency_zero() {
        assert_eq!(to_currency_string(Decimal::ZERO), "₹ 0.00");
        assert_eq!(to_currency_string(dec!(-0.001)), "₹ 0.00");
    }

    #[test]
    fn test_currency_rounds_midpoint_away_from_zero() {
        assert_eq!(to_currency_string(dec!(0.125)), "₹ 0.13");
        assert_eq!(to_currency_string(dec!(0.135)), "₹ 0.14");
        assert_eq!(to_currency_string(dec!(-0.125)), "-₹ 0.13");
        assert_eq!(to_currency_string(dec!(999.995)), "₹ 1,000.00");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(to_percentage_string(dec!(12.344)), "(12.34%)");
        assert_eq!(to_percentage_string(dec!(-6.97)), "(-6.97%)");
        assert_eq!(to_percentage_string(dec!(5)), "(5.00%)");
        assert_eq!(to_percentage_string(Decimal::ZERO), "(0.00%)");
    }
}
