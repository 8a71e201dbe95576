//! [`HttpTransport`] backed by `reqwest`.

use std::error::Error as StdError;
use std::io;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{FailureCause, HttpTransport, TransportFailure};

/// Default deadline for a holdings request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests give up after `timeout`.
    ///
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportFailure> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| to_failure(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportFailure::new(
                FailureCause::Other,
                format!("HTTP {}", status),
            ));
        }

        let body = response.bytes().await.map_err(|e| to_failure(&e))?;
        debug!("GET {} returned {} bytes", url, body.len());
        Ok(body.to_vec())
    }
}

fn to_failure(err: &reqwest::Error) -> TransportFailure {
    TransportFailure::new(classify(err), error_chain(err))
}

/// Maps a reqwest error onto a [`FailureCause`].
///
/// Timeouts are checked first since reqwest reports its own deadline
/// without an io error underneath. DNS failures are recognised from the
/// connector's message because the resolver error carries no useful kind.
pub(crate) fn classify(err: &reqwest::Error) -> FailureCause {
    if err.is_timeout() {
        return FailureCause::TimedOut;
    }

    let chain = error_chain(err);
    if chain.contains("dns error") {
        return if chain.contains("not known") || chain.contains("No address") {
            FailureCause::CannotFindHost
        } else {
            FailureCause::DnsLookupFailed
        };
    }

    if let Some(io_err) = find_io_error(err) {
        if let Some(cause) = classify_io(io_err.kind()) {
            return cause;
        }
    }

    if err.is_connect() {
        return FailureCause::CannotConnectToHost;
    }
    if err.is_body() {
        return FailureCause::ConnectionLost;
    }

    FailureCause::Other
}

fn classify_io(kind: io::ErrorKind) -> Option<FailureCause> {
    match kind {
        io::ErrorKind::TimedOut => Some(FailureCause::TimedOut),
        io::ErrorKind::NotConnected
        | io::ErrorKind::NetworkUnreachable
        | io::ErrorKind::NetworkDown => Some(FailureCause::NotConnected),
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::UnexpectedEof => Some(FailureCause::ConnectionLost),
        io::ErrorKind::PermissionDenied => Some(FailureCause::DataNotAllowed),
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::AddrNotAvailable
        | io::ErrorKind::HostUnreachable => Some(FailureCause::CannotConnectToHost),
        _ => None,
    }
}

fn find_io_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a io::Error> {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            return Some(io_err);
        }
        current = e.source();
    }
    None
}

fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(e) = current {
        parts.push(e.to_string());
        current = e.source();
    }
    parts.join(": ")
}
