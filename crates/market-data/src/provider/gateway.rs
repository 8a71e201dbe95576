use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use url::Url;

use crate::errors::MarketDataError;
use crate::models::HoldingsPayload;
use crate::transport::{FailureCause, HttpTransport, TransportFailure};

use super::HoldingsProvider;

/// Provider ID constant
pub const GATEWAY_ID: &str = "HOLDINGS_API";

/// Fetches the holdings payload over an injected [`HttpTransport`].
pub struct HoldingsGateway {
    transport: Arc<dyn HttpTransport>,
}

impl HoldingsGateway {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    fn parse_endpoint(endpoint: &str) -> Result<Url, MarketDataError> {
        let url =
            Url::parse(endpoint).map_err(|e| MarketDataError::InvalidEndpoint(e.to_string()))?;

        match url.scheme() {
            "http" | "https" if url.host().is_some() => Ok(url),
            _ => Err(MarketDataError::InvalidEndpoint(format!(
                "unsupported endpoint '{}'",
                endpoint
            ))),
        }
    }
}

/// Maps a transport failure onto the gateway error taxonomy.
pub fn classify_failure(failure: &TransportFailure) -> MarketDataError {
    match failure.cause {
        FailureCause::NotConnected | FailureCause::ConnectionLost | FailureCause::DataNotAllowed => {
            MarketDataError::NoConnectivity
        }
        FailureCause::TimedOut => MarketDataError::Timeout,
        FailureCause::CannotFindHost
        | FailureCause::CannotConnectToHost
        | FailureCause::DnsLookupFailed => MarketDataError::ServerUnreachable,
        FailureCause::Other => MarketDataError::ServerError(failure.detail.clone()),
    }
}

#[async_trait]
impl HoldingsProvider for HoldingsGateway {
    fn id(&self) -> &'static str {
        GATEWAY_ID
    }

    async fn fetch(&self, endpoint: &str) -> Result<HoldingsPayload, MarketDataError> {
        let url = Self::parse_endpoint(endpoint)?;

        debug!("{}: requesting holdings from {}", GATEWAY_ID, url);
        let body = self.transport.get(&url).await.map_err(|failure| {
            let error = classify_failure(&failure);
            warn!(
                "{}: request to {} failed ({}) -> {}",
                GATEWAY_ID,
                url,
                failure,
                error.kind()
            );
            error
        })?;

        if body.is_empty() {
            warn!("{}: empty response body from {}", GATEWAY_ID, url);
            return Err(MarketDataError::NoData);
        }

        HoldingsPayload::from_slice(&body).map_err(|e| {
            warn!("{}: {}", GATEWAY_ID, e);
            e
        })
    }
}
