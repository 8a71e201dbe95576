//! Holdings provider abstraction and the HTTP gateway implementation.
//!
//! The gateway turns an endpoint string into a decoded [`HoldingsPayload`]
//! or exactly one [`MarketDataError`]:
//!
//! ```text
//!  endpoint ──parse──▶ Url ──HttpTransport::get──▶ bytes ──decode──▶ HoldingsPayload
//!     │                           │                  │                   │
//!     ▼                           ▼                  ▼                   ▼
//! InvalidEndpoint      NoConnectivity/Timeout/     NoData          DecodingError
//!                      ServerUnreachable/ServerError
//! ```
//!
//! [`HoldingsPayload`]: crate::models::HoldingsPayload
//! [`MarketDataError`]: crate::errors::MarketDataError

mod gateway;
mod traits;

pub use gateway::{classify_failure, HoldingsGateway, GATEWAY_ID};
pub use traits::HoldingsProvider;
