//! Holdings provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::HoldingsPayload;

/// A remote source of holdings.
///
/// Implementations issue exactly one request per call and classify every
/// failure into [`MarketDataError`]. Retry policy, if any, belongs to the
/// caller.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tickerbook_market_data::{HoldingsPayload, HoldingsProvider, MarketDataError};
///
/// struct StaticProvider(HoldingsPayload);
///
/// #[async_trait]
/// impl HoldingsProvider for StaticProvider {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     async fn fetch(&self, _endpoint: &str) -> Result<HoldingsPayload, MarketDataError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait HoldingsProvider: Send + Sync {
    /// Identifier used in logs.
    fn id(&self) -> &'static str;

    /// Fetches and decodes the holdings payload at `endpoint`.
    async fn fetch(&self, endpoint: &str) -> Result<HoldingsPayload, MarketDataError>;
}
