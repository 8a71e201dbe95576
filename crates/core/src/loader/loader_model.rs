use std::fmt;

use serde::{Deserialize, Serialize};

use tickerbook_market_data::MarketDataError;

use crate::portfolio::holdings::Holding;
use crate::portfolio::snapshot::PortfolioSnapshot;
use crate::portfolio::summary::PortfolioSummary;

pub const BANNER_CONNECTIVITY: &str = "No internet connection.\nShowing cached data.";
pub const BANNER_TIMEOUT: &str = "Connection timeout.\nShowing cached data.";
pub const BANNER_SERVER: &str = "Server error.\nShowing cached data.";

/// Why fallback data is on screen, as far as the user needs to know.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BannerCategory {
    Connectivity,
    Timeout,
    Server,
}

impl BannerCategory {
    /// Banner copy shown above fallback holdings.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Connectivity => BANNER_CONNECTIVITY,
            Self::Timeout => BANNER_TIMEOUT,
            Self::Server => BANNER_SERVER,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connectivity => "connectivity",
            Self::Timeout => "timeout",
            Self::Server => "server",
        }
    }
}

impl From<&MarketDataError> for BannerCategory {
    fn from(error: &MarketDataError) -> Self {
        match error {
            MarketDataError::NoConnectivity => Self::Connectivity,
            MarketDataError::Timeout => Self::Timeout,
            MarketDataError::NoData
            | MarketDataError::ServerError(_)
            | MarketDataError::ServerUnreachable => Self::Server,
            // Everything else lands in the server bucket as well.
            MarketDataError::InvalidEndpoint(_) | MarketDataError::DecodingError(_) => Self::Server,
        }
    }
}

impl fmt::Display for BannerCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one load cycle. Later cycles compare greater.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleId(pub u64);

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the holdings of an outcome came from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadSource {
    Remote,
    Fallback,
}

/// Result of one load cycle. Both arms carry a complete snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The remote source answered with a valid payload.
    Succeeded(PortfolioSnapshot),
    /// The remote source failed; holdings come from the fallback dataset.
    FellBack(PortfolioSnapshot, BannerCategory),
}

impl LoadOutcome {
    pub fn snapshot(&self) -> &PortfolioSnapshot {
        match self {
            Self::Succeeded(snapshot) | Self::FellBack(snapshot, _) => snapshot,
        }
    }

    pub fn into_snapshot(self) -> PortfolioSnapshot {
        match self {
            Self::Succeeded(snapshot) | Self::FellBack(snapshot, _) => snapshot,
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        self.snapshot().holdings()
    }

    pub fn summary(&self) -> &PortfolioSummary {
        self.snapshot().summary()
    }

    pub fn banner(&self) -> Option<BannerCategory> {
        match self {
            Self::Succeeded(_) => None,
            Self::FellBack(_, banner) => Some(*banner),
        }
    }

    pub fn source(&self) -> LoadSource {
        match self {
            Self::Succeeded(_) => LoadSource::Remote,
            Self::FellBack(..) => LoadSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FellBack(..))
    }
}
