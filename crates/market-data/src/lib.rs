//! Tickerbook Market Data Crate
//!
//! Fetches a user's holdings from the remote holdings API and classifies
//! every way that can fail.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  HoldingsGateway | --> |  HttpTransport   | --> |  remote endpoint |
//! +------------------+     +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! | HoldingsPayload  |  (decoded, exact decimals)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`HoldingsProvider`] - Anything that can fetch a holdings payload
//! - [`HoldingsGateway`] - The HTTP implementation of [`HoldingsProvider`]
//! - [`HttpTransport`] - Injected single-request HTTP client
//! - [`HoldingsPayload`] / [`RawHolding`] - Wire schema
//! - [`MarketDataError`] - Closed failure taxonomy

pub mod errors;
pub mod models;
pub mod provider;
pub mod transport;

pub use errors::MarketDataError;
pub use models::{HoldingsData, HoldingsPayload, RawHolding};
pub use provider::{classify_failure, HoldingsGateway, HoldingsProvider, GATEWAY_ID};
pub use transport::{
    FailureCause, HttpTransport, ReqwestTransport, TransportFailure, DEFAULT_FETCH_TIMEOUT,
};
