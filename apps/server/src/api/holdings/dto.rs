use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tickerbook_core::{
    loader::{BannerCategory, LoadOutcome, LoadSource},
    portfolio::{HoldingRow, SummaryView},
};

#[derive(Deserialize)]
pub struct HoldingItemQuery {
    pub index: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub category: BannerCategory,
    pub message: &'static str,
}

impl From<BannerCategory> for BannerView {
    fn from(category: BannerCategory) -> Self {
        Self {
            category,
            message: category.message(),
        }
    }
}

/// Everything a holdings screen renders.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsView {
    /// `None` until the first load completes.
    pub source: Option<LoadSource>,
    pub banner: Option<BannerView>,
    pub as_of: Option<DateTime<Utc>>,
    pub rows: Vec<HoldingRow>,
    pub summary: SummaryView,
}

impl HoldingsView {
    pub fn empty() -> Self {
        Self {
            source: None,
            banner: None,
            as_of: None,
            rows: Vec::new(),
            summary: SummaryView::unloaded(),
        }
    }
}

impl From<&LoadOutcome> for HoldingsView {
    fn from(outcome: &LoadOutcome) -> Self {
        Self {
            source: Some(outcome.source()),
            banner: outcome.banner().map(BannerView::from),
            as_of: Some(outcome.snapshot().as_of()),
            rows: outcome.holdings().iter().map(HoldingRow::from).collect(),
            summary: SummaryView::from(outcome.summary()),
        }
    }
}
