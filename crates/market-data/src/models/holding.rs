use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Top-level holdings response: `{ "data": { "userHolding": [...] } }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoldingsPayload {
    pub data: HoldingsData,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsData {
    pub user_holding: Vec<RawHolding>,
}

/// One position exactly as the source reports it.
///
/// Unknown fields are ignored. Every listed field is required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHolding {
    pub symbol: String,
    pub quantity: i64,
    #[serde(deserialize_with = "super::wire_decimal::deserialize")]
    pub ltp: Decimal,
    #[serde(deserialize_with = "super::wire_decimal::deserialize")]
    pub avg_price: Decimal,
    #[serde(deserialize_with = "super::wire_decimal::deserialize")]
    pub close: Decimal,
}

impl HoldingsPayload {
    /// Decodes a payload from raw bytes.
    ///
    /// Decoding is all-or-nothing: a single malformed holding (including one
    /// with an empty symbol) rejects the whole payload. So does a payload
    /// whose position values or portfolio totals do not fit in a `Decimal`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MarketDataError> {
        let payload: HoldingsPayload = serde_json::from_slice(bytes)
            .map_err(|e| MarketDataError::DecodingError(e.to_string()))?;

        if let Some(index) = payload
            .data
            .user_holding
            .iter()
            .position(|h| h.symbol.is_empty())
        {
            return Err(MarketDataError::DecodingError(format!(
                "holding at index {} has an empty symbol",
                index
            )));
        }

        check_value_range(payload.holdings())?;
        Ok(payload)
    }

    pub fn holdings(&self) -> &[RawHolding] {
        &self.data.user_holding
    }

    pub fn into_holdings(self) -> Vec<RawHolding> {
        self.data.user_holding
    }
}

/// Checks every position value and running total fits in a `Decimal`.
///
/// On overflow returns the index of the offending holding, or the list
/// length when only the final total PnL overflows.
fn checked_totals(holdings: &[RawHolding]) -> Result<(), usize> {
    let mut current_total = Decimal::ZERO;
    let mut invested_total = Decimal::ZERO;
    let mut todays_total = Decimal::ZERO;

    for (index, h) in holdings.iter().enumerate() {
        let units = Decimal::from(h.quantity);
        let step = || -> Option<(Decimal, Decimal, Decimal)> {
            let current = h.ltp.checked_mul(units)?;
            let invested = h.avg_price.checked_mul(units)?;
            current.checked_sub(invested)?;
            let todays = h.close.checked_sub(h.ltp)?.checked_mul(units)?;
            Some((
                current_total.checked_add(current)?,
                invested_total.checked_add(invested)?,
                todays_total.checked_add(todays)?,
            ))
        };
        let (current, invested, todays) = step().ok_or(index)?;
        current_total = current;
        invested_total = invested;
        todays_total = todays;
    }

    current_total.checked_sub(invested_total).map(|_| ()).ok_or(holdings.len())
}

fn check_value_range(holdings: &[RawHolding]) -> Result<(), MarketDataError> {
    checked_totals(holdings).map_err(|index| {
        MarketDataError::DecodingError(format!(
            "holding values overflow the decimal range at index {}",
            index
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"{
        "data": {
            "userHolding": [
                {"symbol": "ASHOKLEY", "quantity": 3, "ltp": 119.10, "avgPrice": 106.97, "close": 120.00},
                {"symbol": "IDEA", "quantity": 3, "ltp": 9.95, "avgPrice": 9.02, "close": 10, "exchange": "NSE"},
                {"symbol": "IDEA", "quantity": 71, "ltp": 9.95, "avgPrice": 9.02, "close": 10.00}
            ]
        },
        "meta": {"version": 2}
    }"#;

    #[test]
    fn test_decodes_payload_and_ignores_unknown_fields() {
        let payload = HoldingsPayload::from_slice(SAMPLE.as_bytes()).unwrap();
        let holdings = payload.holdings();

        assert_eq!(holdings.len(), 3);
        assert_eq!(holdings[0].symbol, "ASHOKLEY");
        assert_eq!(holdings[0].quantity, 3);
        assert_eq!(holdings[0].ltp, dec!(119.10));
        assert_eq!(holdings[0].avg_price, dec!(106.97));
        assert_eq!(holdings[1].close, dec!(10.00));
    }

    #[test]
    fn test_duplicate_symbols_stay_separate() {
        let payload = HoldingsPayload::from_slice(SAMPLE.as_bytes()).unwrap();
        let idea: Vec<_> = payload
            .holdings()
            .iter()
            .filter(|h| h.symbol == "IDEA")
            .collect();
        assert_eq!(idea.len(), 2);
        assert_eq!(idea[0].quantity + idea[1].quantity, 74);
    }

    #[test]
    fn test_missing_field_is_decoding_error() {
        let json = r#"{"data": {"userHolding": [{"symbol": "X", "quantity": 1, "ltp": 1.0, "close": 1.0}]}}"#;
        let err = HoldingsPayload::from_slice(json.as_bytes()).unwrap_err();
        assert!(matches!(err, MarketDataError::DecodingError(_)));
    }

    #[test]
    fn test_one_bad_holding_rejects_everything() {
        let json = r#"{"data": {"userHolding": [
            {"symbol": "OK", "quantity": 1, "ltp": 1.0, "avgPrice": 1.0, "close": 1.0},
            {"symbol": "BAD", "quantity": "many", "ltp": 1.0, "avgPrice": 1.0, "close": 1.0}
        ]}}"#;
        let err = HoldingsPayload::from_slice(json.as_bytes()).unwrap_err();
        assert!(matches!(err, MarketDataError::DecodingError(_)));
    }

    #[test]
    fn test_whitespace_symbol_is_accepted() {
        let json = r#"{"data": {"userHolding": [{"symbol": " ", "quantity": 1, "ltp": 1.0, "avgPrice": 1.0, "close": 1.0}]}}"#;
        let payload = HoldingsPayload::from_slice(json.as_bytes()).unwrap();
        assert_eq!(payload.holdings()[0].symbol, " ");
    }

    #[test]
    fn test_position_overflow_is_decoding_error() {
        let json = r#"{"data": {"userHolding": [
            {"symbol": "OK", "quantity": 1, "ltp": 1.0, "avgPrice": 1.0, "close": 1.0},
            {"symbol": "HUGE", "quantity": 1000000000000000, "ltp": 1e15, "avgPrice": 1, "close": 1}
        ]}}"#;
        let err = HoldingsPayload::from_slice(json.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            MarketDataError::DecodingError(
                "holding values overflow the decimal range at index 1".to_string()
            )
        );
    }

    #[test]
    fn test_total_overflow_is_decoding_error() {
        // Each position fits; their sum does not.
        let big = "{\"symbol\": \"BIG\", \"quantity\": 1, \"ltp\": \"70000000000000000000000000000\", \"avgPrice\": 0, \"close\": \"70000000000000000000000000000\"}";
        let json = format!(r#"{{"data": {{"userHolding": [{big}, {big}]}}}}"#);
        let err = HoldingsPayload::from_slice(json.as_bytes()).unwrap_err();
        assert!(matches!(err, MarketDataError::DecodingError(_)), "{err:?}");
    }

    #[test]
    fn test_empty_symbol_is_decoding_error() {
        let json = r#"{"data": {"userHolding": [{"symbol": "", "quantity": 1, "ltp": 1.0, "avgPrice": 1.0, "close": 1.0}]}}"#;
        let err = HoldingsPayload::from_slice(json.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            MarketDataError::DecodingError("holding at index 0 has an empty symbol".to_string())
        );
    }

    #[test]
    fn test_wrong_envelope_is_decoding_error() {
        let err = HoldingsPayload::from_slice(br#"{"holdings": []}"#).unwrap_err();
        assert!(matches!(err, MarketDataError::DecodingError(_)));

        let err = HoldingsPayload::from_slice(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, MarketDataError::DecodingError(_)));
    }

    #[test]
    fn test_empty_list_is_valid() {
        let payload = HoldingsPayload::from_slice(br#"{"data": {"userHolding": []}}"#).unwrap();
        assert!(payload.holdings().is_empty());
    }
}
