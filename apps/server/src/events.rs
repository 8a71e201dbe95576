use serde_json::{json, Value};
use tokio::sync::broadcast;

use tickerbook_core::events::LoadObserver;
use tickerbook_core::loader::{CycleId, LoadOutcome};

/// Event names as emitted to SSE clients.
pub const HOLDINGS_LOAD_START: &str = "holdings:load-start";
pub const HOLDINGS_LOAD_FINISH: &str = "holdings:load-finish";
pub const HOLDINGS_LOAD_RESULT: &str = "holdings:load-result";

pub const EVENT_BUS_CAPACITY: usize = 256;

/// Serializable envelope that carries event names and optional payloads.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Lightweight broadcast bus that fans out events to any connected clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // No subscribers is not an error.
        let _ = self.sender.send(event);
    }
}

/// Publishes loader lifecycle callbacks on the [`EventBus`].
#[derive(Clone)]
pub struct EventBusLoadObserver {
    bus: EventBus,
}

impl EventBusLoadObserver {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl LoadObserver for EventBusLoadObserver {
    fn on_load_started(&self, cycle: CycleId) {
        self.bus.publish(ServerEvent::with_payload(
            HOLDINGS_LOAD_START,
            json!({ "cycle": cycle }),
        ));
    }

    fn on_load_finished(&self, cycle: CycleId) {
        self.bus.publish(ServerEvent::with_payload(
            HOLDINGS_LOAD_FINISH,
            json!({ "cycle": cycle }),
        ));
    }

    fn on_result(&self, cycle: CycleId, outcome: &LoadOutcome) {
        self.bus.publish(ServerEvent::with_payload(
            HOLDINGS_LOAD_RESULT,
            json!({
                "cycle": cycle,
                "source": outcome.source(),
                "banner": outcome.banner(),
                "count": outcome.holdings().len(),
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickerbook_core::loader::BannerCategory;
    use tickerbook_core::portfolio::PortfolioSnapshot;

    #[tokio::test]
    async fn observer_publishes_lifecycle_in_order() {
        let bus = EventBus::new(8);
        let mut receiver = bus.subscribe();
        let observer = EventBusLoadObserver::new(bus);

        let outcome = LoadOutcome::FellBack(PortfolioSnapshot::empty(), BannerCategory::Timeout);
        observer.on_load_started(CycleId(4));
        observer.on_load_finished(CycleId(4));
        observer.on_result(CycleId(4), &outcome);

        let started = receiver.recv().await.unwrap();
        assert_eq!(started.name, HOLDINGS_LOAD_START);
        assert_eq!(started.payload.unwrap()["cycle"], 4);
        assert_eq!(receiver.recv().await.unwrap().name, HOLDINGS_LOAD_FINISH);

        let result = receiver.recv().await.unwrap();
        assert_eq!(result.name, HOLDINGS_LOAD_RESULT);
        let payload = result.payload.unwrap();
        assert_eq!(payload["source"], "fallback");
        assert_eq!(payload["banner"], "timeout");
        assert_eq!(payload["count"], 0);
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new(1);
        bus.publish(ServerEvent::new(HOLDINGS_LOAD_START));
    }
}
