use crate::loader::{CycleId, LoadOutcome};

/// One notification emitted during a load cycle.
///
/// For any cycle the order is always `Started`, `Finished`, `Result`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    Started(CycleId),
    Finished(CycleId),
    Result(CycleId, LoadOutcome),
}

impl LoadEvent {
    pub fn cycle(&self) -> CycleId {
        match self {
            Self::Started(cycle) | Self::Finished(cycle) | Self::Result(cycle, _) => *cycle,
        }
    }

    /// Canonical event name, shared with the web runtime.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Started(_) => "holdings:load-start",
            Self::Finished(_) => "holdings:load-finish",
            Self::Result(..) => "holdings:load-result",
        }
    }
}
