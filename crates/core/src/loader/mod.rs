//! Resilient holdings loading.
//!
//! ```text
//!  load() ──▶ HoldingsProvider::fetch ──ok──▶ Succeeded(snapshot)
//!                     │
//!                    err ──▶ FallbackSource ──▶ FellBack(snapshot, banner)
//! ```

mod fallback;
mod loader_model;
mod loader_service;

pub use fallback::{
    decode_dataset, BundledFallbackSource, FallbackSource, FileFallbackSource, BUNDLED_DATASET,
};
pub use loader_model::{
    BannerCategory, CycleId, LoadOutcome, LoadSource, BANNER_CONNECTIVITY, BANNER_SERVER,
    BANNER_TIMEOUT,
};
pub use loader_service::{HoldingsLoader, HoldingsLoaderTrait, LoaderConfig};
