//! Tickerbook Core - holdings loading and portfolio aggregation.
//!
//! This crate turns raw holdings from the market-data gateway into domain
//! holdings, falls back to a static dataset when the gateway fails, and
//! aggregates the result with exact decimal arithmetic. It knows nothing
//! about HTTP servers or UI; observers decouple it from presentation.

pub mod constants;
pub mod errors;
pub mod events;
pub mod loader;
pub mod portfolio;
pub mod utils;

// Re-export the types most callers need
pub use loader::{HoldingsLoader, HoldingsLoaderTrait, LoadOutcome};
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
