//! Market data models
//!
//! - `holding` - Wire representation of the holdings payload
//! - `wire_decimal` - Exact decimal decoding for JSON numbers

mod holding;
pub mod wire_decimal;

pub use holding::{HoldingsData, HoldingsPayload, RawHolding};
