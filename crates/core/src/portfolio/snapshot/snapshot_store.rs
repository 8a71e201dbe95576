use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use crate::loader::{CycleId, LoadOutcome};
use crate::portfolio::holdings::Holding;
use crate::portfolio::summary::PortfolioSummary;

#[derive(Default)]
struct StoreState {
    cycle: Option<CycleId>,
    outcome: Option<Arc<LoadOutcome>>,
}

/// Latest published load outcome.
///
/// Readers get a shared handle to an immutable outcome, so a reader never
/// sees a half-replaced list. Outcomes from a cycle older than the one
/// already published are discarded, which keeps the newest cycle visible
/// when overlapping loads finish out of order.
#[derive(Default)]
pub struct SnapshotStore {
    state: RwLock<StoreState>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Publishes `outcome` unless a newer cycle is already published.
    ///
    /// Returns whether the outcome was accepted.
    pub fn apply(&self, cycle: CycleId, outcome: LoadOutcome) -> bool {
        let mut state = self.write();
        if matches!(state.cycle, Some(current) if current > cycle) {
            debug!(
                "Discarding outcome of cycle {}; cycle {:?} already published",
                cycle, state.cycle
            );
            return false;
        }
        state.cycle = Some(cycle);
        state.outcome = Some(Arc::new(outcome));
        true
    }

    pub fn current(&self) -> Option<Arc<LoadOutcome>> {
        self.read().outcome.clone()
    }

    pub fn current_cycle(&self) -> Option<CycleId> {
        self.read().cycle
    }

    /// Number of holdings in the published outcome, zero before the first load.
    pub fn len(&self) -> usize {
        self.read()
            .outcome
            .as_ref()
            .map_or(0, |outcome| outcome.holdings().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Holding at `index`, or `None` when out of range or nothing is loaded.
    pub fn holding(&self, index: usize) -> Option<Holding> {
        self.read()
            .outcome
            .as_ref()
            .and_then(|outcome| outcome.snapshot().holding(index).cloned())
    }

    pub fn summary(&self) -> PortfolioSummary {
        self.read()
            .outcome
            .as_ref()
            .map_or_else(PortfolioSummary::zero, |outcome| *outcome.summary())
    }
}
