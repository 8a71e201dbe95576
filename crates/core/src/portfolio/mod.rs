//! Holdings, their aggregation, published snapshots and display views.

pub mod holdings;
pub mod snapshot;
pub mod summary;
pub mod view;

pub use holdings::Holding;
pub use snapshot::{PortfolioSnapshot, SnapshotStore};
pub use summary::{aggregate, PortfolioSummary};
pub use view::{HoldingRow, SummaryView};
