//! Serde helpers that read monetary JSON values into [`Decimal`] without
//! going through binary floating point arithmetic.
//!
//! JSON numbers arrive as `f64`. The shortest round-trip string of that
//! `f64` (what `Display` prints) is parsed as a decimal, so `119.1` on the
//! wire becomes exactly `119.10` rather than `119.099999999999994315658`.
//! String-encoded numbers are accepted as well.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::Deserializer;

/// Minimum number of fractional digits kept on decoded prices.
pub const MIN_SCALE: u32 = 2;

/// Parses a decimal string and pads it to [`MIN_SCALE`] fractional digits.
pub fn parse(value: &str) -> Result<Decimal, rust_decimal::Error> {
    let trimmed = value.trim();
    let mut decimal = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))?;
    if decimal.scale() < MIN_SCALE {
        decimal.rescale(MIN_SCALE);
    }
    Ok(decimal)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(WireDecimalVisitor)
}

struct WireDecimalVisitor;

impl<'de> Visitor<'de> for WireDecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        parse(&value.to_string()).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        parse(&value.to_string()).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        if !value.is_finite() {
            return Err(E::custom(format!("non-finite number {}", value)));
        }
        parse(&value.to_string()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        parse(value).map_err(E::custom)
    }
}
