//! Load observer trait and implementations.

use std::sync::{Arc, Mutex};

use log::warn;
use tokio::sync::mpsc;

use super::LoadEvent;
use crate::loader::{CycleId, LoadOutcome};

/// Receives load lifecycle notifications.
///
/// Methods are invoked on the task running the load. Implementations that
/// need delivery elsewhere should hand the event off (see
/// [`ChannelLoadObserver`]).
///
/// # Design Rules
///
/// - Callbacks must be fast and non-blocking
/// - A failing observer must not affect the load
pub trait LoadObserver: Send + Sync {
    fn on_load_started(&self, cycle: CycleId);

    fn on_load_finished(&self, cycle: CycleId);

    fn on_result(&self, cycle: CycleId, outcome: &LoadOutcome);
}

/// No-op implementation for contexts that don't need notifications.
#[derive(Clone, Default)]
pub struct NoOpLoadObserver;

impl LoadObserver for NoOpLoadObserver {
    fn on_load_started(&self, _cycle: CycleId) {}

    fn on_load_finished(&self, _cycle: CycleId) {}

    fn on_result(&self, _cycle: CycleId, _outcome: &LoadOutcome) {}
}

/// Forwards every notification as a [`LoadEvent`] over an unbounded channel,
/// so it is handled on whichever task drains the receiver.
#[derive(Clone)]
pub struct ChannelLoadObserver {
    sender: mpsc::UnboundedSender<LoadEvent>,
}

impl ChannelLoadObserver {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<LoadEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn send(&self, event: LoadEvent) {
        if self.sender.send(event).is_err() {
            warn!("Load event receiver dropped; event discarded");
        }
    }
}

impl LoadObserver for ChannelLoadObserver {
    fn on_load_started(&self, cycle: CycleId) {
        self.send(LoadEvent::Started(cycle));
    }

    fn on_load_finished(&self, cycle: CycleId) {
        self.send(LoadEvent::Finished(cycle));
    }

    fn on_result(&self, cycle: CycleId, outcome: &LoadOutcome) {
        self.send(LoadEvent::Result(cycle, outcome.clone()));
    }
}

/// Mock observer for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockLoadObserver {
    events: Arc<Mutex<Vec<LoadEvent>>>,
}

impl MockLoadObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<LoadEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the event names in emission order.
    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(LoadEvent::name).collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn push(&self, event: LoadEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl LoadObserver for MockLoadObserver {
    fn on_load_started(&self, cycle: CycleId) {
        self.push(LoadEvent::Started(cycle));
    }

    fn on_load_finished(&self, cycle: CycleId) {
        self.push(LoadEvent::Finished(cycle));
    }

    fn on_result(&self, cycle: CycleId, outcome: &LoadOutcome) {
        self.push(LoadEvent::Result(cycle, outcome.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::snapshot::PortfolioSnapshot;

    #[test]
    fn test_noop_observer_does_not_panic() {
        let observer = NoOpLoadObserver;
        observer.on_load_started(CycleId(1));
        observer.on_load_finished(CycleId(1));
        observer.on_result(CycleId(1), &LoadOutcome::Succeeded(PortfolioSnapshot::empty()));
    }

    #[test]
    fn test_mock_observer_collects_events() {
        let observer = MockLoadObserver::new();
        observer.on_load_started(CycleId(3));
        observer.on_load_finished(CycleId(3));

        assert_eq!(
            observer.events(),
            vec![LoadEvent::Started(CycleId(3)), LoadEvent::Finished(CycleId(3))]
        );

        observer.clear();
        assert!(observer.events().is_empty());
    }

    #[tokio::test]
    async fn test_channel_observer_forwards_in_order() {
        let (observer, mut receiver) = ChannelLoadObserver::new();
        let outcome = LoadOutcome::Succeeded(PortfolioSnapshot::empty());

        let handle = tokio::spawn(async move {
            observer.on_load_started(CycleId(1));
            observer.on_load_finished(CycleId(1));
            observer.on_result(CycleId(1), &outcome);
        });
        handle.await.unwrap();

        let mut names = Vec::new();
        while let Some(event) = receiver.recv().await {
            assert_eq!(event.cycle(), CycleId(1));
            names.push(event.name());
        }
        assert_eq!(
            names,
            vec!["holdings:load-start", "holdings:load-finish", "holdings:load-result"]
        );
    }

    #[test]
    fn test_channel_observer_survives_dropped_receiver() {
        let (observer, receiver) = ChannelLoadObserver::new();
        drop(receiver);
        observer.on_load_started(CycleId(1));
    }
}
