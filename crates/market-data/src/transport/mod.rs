//! HTTP transport seam.
//!
//! The gateway never talks to an HTTP client directly. It is handed an
//! [`HttpTransport`] at construction, which performs exactly one GET and
//! reports failures as a [`TransportFailure`] with a client-neutral
//! [`FailureCause`]. Mapping causes onto [`MarketDataError`] is the
//! gateway's job.
//!
//! [`MarketDataError`]: crate::errors::MarketDataError

mod reqwest_transport;

pub use reqwest_transport::{ReqwestTransport, DEFAULT_FETCH_TIMEOUT};

use async_trait::async_trait;
use std::fmt;
use url::Url;

/// Why a request failed below the HTTP layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureCause {
    /// The machine has no network route at all.
    NotConnected,
    /// An established connection dropped mid-request.
    ConnectionLost,
    /// The platform refused to send data (e.g. metered or restricted link).
    DataNotAllowed,
    /// The request deadline elapsed.
    TimedOut,
    /// Name resolution returned no host.
    CannotFindHost,
    /// The host resolved but refused or never accepted the connection.
    CannotConnectToHost,
    /// The resolver itself failed.
    DnsLookupFailed,
    /// Anything else, including non-success HTTP statuses.
    Other,
}

/// A failed transport call: a cause plus a human-readable detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportFailure {
    pub cause: FailureCause,
    pub detail: String,
}

impl TransportFailure {
    pub fn new(cause: FailureCause, detail: impl Into<String>) -> Self {
        Self {
            cause,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.cause, self.detail)
    }
}

impl std::error::Error for TransportFailure {}

/// Issues a single HTTP GET and returns the raw response body.
///
/// Implementations must not retry and must not interpret the body.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportFailure>;
}
