//! Error types for the market data crate.
//!
//! [`MarketDataError`] is the closed taxonomy every gateway failure is
//! classified into. Callers recover from all of these; none is fatal.

use thiserror::Error;

/// Message shown when the endpoint cannot be used at all.
pub const MSG_INVALID_ENDPOINT: &str = "Oops! Something went wrong.\nPlease try again later.";
/// Message shown when the server answered with nothing.
pub const MSG_NO_DATA: &str = "Please try again.";
/// Message shown when the payload could not be understood.
pub const MSG_DECODING: &str =
    "We're having trouble loading your data.\nPlease try again in a moment.";
/// Message shown for every transport-level failure.
pub const MSG_SERVER: &str = "Unable to reach the server.\nPlease try again.";

/// Errors that can occur while fetching holdings from the remote source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// The configured endpoint is not an absolute http(s) URL.
    /// No request was attempted.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The server responded successfully but the body was empty.
    #[error("No data received")]
    NoData,

    /// The body did not match the expected holdings schema.
    #[error("Failed to decode holdings payload: {0}")]
    DecodingError(String),

    /// The device has no usable network path (offline, connection dropped,
    /// or data disallowed).
    #[error("No internet connection")]
    NoConnectivity,

    /// The request exceeded its deadline.
    #[error("Request timed out")]
    Timeout,

    /// The host could not be resolved or connected to.
    #[error("Cannot reach server")]
    ServerUnreachable,

    /// Any other transport failure.
    #[error("Server error: {0}")]
    ServerError(String),
}

impl MarketDataError {
    /// Returns the user-facing description of this error.
    ///
    /// Transport failures all share the same wording; only endpoint,
    /// empty-body and decoding problems get their own copy.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint(_) => MSG_INVALID_ENDPOINT,
            Self::NoData => MSG_NO_DATA,
            Self::DecodingError(_) => MSG_DECODING,
            Self::NoConnectivity
            | Self::Timeout
            | Self::ServerUnreachable
            | Self::ServerError(_) => MSG_SERVER,
        }
    }

    /// Short, stable identifier used in logs and API payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::NoData => "NO_DATA",
            Self::DecodingError(_) => "DECODING_ERROR",
            Self::NoConnectivity => "NO_CONNECTIVITY",
            Self::Timeout => "TIMEOUT",
            Self::ServerUnreachable => "SERVER_UNREACHABLE",
            Self::ServerError(_) => "SERVER_ERROR",
        }
    }
}
