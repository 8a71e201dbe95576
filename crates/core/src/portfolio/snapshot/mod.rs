//! Immutable holdings snapshots and the store that publishes the latest one.

mod snapshot_model;
mod snapshot_store;

pub use snapshot_model::PortfolioSnapshot;
pub use snapshot_store::SnapshotStore;
