//! Static holdings used when the remote source cannot be reached.

use std::fs;
use std::path::PathBuf;

use log::{debug, error};

use tickerbook_market_data::HoldingsPayload;

use crate::errors::{Error, Result};
use crate::portfolio::holdings::Holding;

/// Holdings dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../resources/holdings_fallback.json");

/// Source of holdings to show when the live fetch fails.
///
/// Never fails the caller: an unreadable or malformed dataset yields an
/// empty list.
pub trait FallbackSource: Send + Sync {
    fn load_fallback(&self) -> Vec<Holding>;
}

/// Decodes a dataset in the remote payload schema.
pub fn decode_dataset(bytes: &[u8]) -> Result<Vec<Holding>> {
    let payload = HoldingsPayload::from_slice(bytes)
        .map_err(|e| Error::FallbackDataset(e.to_string()))?;
    Ok(payload.into_holdings().into_iter().map(Holding::from).collect())
}

fn swallow(origin: &str, result: Result<Vec<Holding>>) -> Vec<Holding> {
    match result {
        Ok(holdings) => {
            debug!("Loaded {} fallback holdings from {}", holdings.len(), origin);
            holdings
        }
        Err(e) => {
            error!("Failed to load fallback holdings from {}: {}", origin, e);
            Vec::new()
        }
    }
}

/// Reads the dataset shipped inside the binary.
#[derive(Clone, Debug)]
pub struct BundledFallbackSource {
    dataset: &'static str,
}

impl BundledFallbackSource {
    pub fn new() -> Self {
        Self {
            dataset: BUNDLED_DATASET,
        }
    }

    /// Uses another compiled-in dataset.
    pub fn from_static(dataset: &'static str) -> Self {
        Self { dataset }
    }
}

impl Default for BundledFallbackSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackSource for BundledFallbackSource {
    fn load_fallback(&self) -> Vec<Holding> {
        swallow("bundled dataset", decode_dataset(self.dataset.as_bytes()))
    }
}

/// Reads a dataset from disk on every call.
#[derive(Clone, Debug)]
pub struct FileFallbackSource {
    path: PathBuf,
}

impl FileFallbackSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FallbackSource for FileFallbackSource {
    fn load_fallback(&self) -> Vec<Holding> {
        let origin = self.path.display().to_string();
        let result = fs::read(&self.path)
            .map_err(Error::from)
            .and_then(|bytes| decode_dataset(&bytes));
        swallow(&origin, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::summary::aggregate;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_bundled_dataset_decodes() {
        let holdings = BundledFallbackSource::new().load_fallback();

        assert_eq!(holdings.len(), 6);
        assert_eq!(holdings[0].symbol, "ASHOKLEY");
        assert_eq!(holdings[0].ltp, dec!(119.10));
        assert_eq!(holdings.iter().filter(|h| h.symbol == "IDEA").count(), 2);
    }

    #[test]
    fn test_bundled_dataset_summary() {
        let summary = aggregate(&BundledFallbackSource::new().load_fallback());

        assert_eq!(summary.current_value(), dec!(26336.20));
        assert_eq!(summary.total_investment(), dec!(28309.36));
        assert_eq!(summary.total_pnl(), dec!(-1973.16));
        assert_eq!(summary.todays_pnl(), dec!(38.80));
    }

    #[test]
    fn test_malformed_static_dataset_is_empty() {
        let source = BundledFallbackSource::from_static("{\"data\": {}}");
        assert!(source.load_fallback().is_empty());

        let source = BundledFallbackSource::from_static("");
        assert!(source.load_fallback().is_empty());
    }

    #[test]
    fn test_file_source_reads_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data":{{"userHolding":[{{"symbol":"TCS","quantity":2,"ltp":3500.5,"avgPrice":3200,"close":3490}}]}}}}"#
        )
        .unwrap();

        let holdings = FileFallbackSource::new(file.path()).load_fallback();
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].symbol, "TCS");
        assert_eq!(holdings[0].current_value(), dec!(7001.0));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileFallbackSource::new(dir.path().join("missing.json"));
        assert!(source.load_fallback().is_empty());
    }

    #[test]
    fn test_decode_dataset_reports_error() {
        let err = decode_dataset(b"not json").unwrap_err();
        assert!(matches!(err, Error::FallbackDataset(_)));
    }
}
