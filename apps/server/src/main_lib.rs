use std::sync::Arc;

use crate::{
    config::Config,
    events::{EventBus, EventBusLoadObserver, EVENT_BUS_CAPACITY},
};
use tickerbook_core::{
    loader::{
        BundledFallbackSource, FallbackSource, FileFallbackSource, HoldingsLoader,
        HoldingsLoaderTrait, LoaderConfig,
    },
    portfolio::SnapshotStore,
};
use tickerbook_market_data::{HoldingsGateway, HoldingsProvider, ReqwestTransport};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub loader: Arc<dyn HoldingsLoaderTrait>,
    pub store: Arc<SnapshotStore>,
    pub event_bus: EventBus,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let event_bus = EventBus::new(EVENT_BUS_CAPACITY);

    if config.request_timeout <= config.fetch_timeout {
        tracing::warn!(
            "Request timeout {:?} does not exceed fetch timeout {:?}; refresh responses may \
             time out while their load keeps running",
            config.request_timeout,
            config.fetch_timeout
        );
    }

    let transport = Arc::new(ReqwestTransport::new(config.fetch_timeout)?);
    let provider: Arc<dyn HoldingsProvider> = Arc::new(HoldingsGateway::new(transport));

    let fallback: Arc<dyn FallbackSource> = match &config.fallback_path {
        Some(path) => {
            tracing::info!("Fallback holdings read from {}", path.display());
            Arc::new(FileFallbackSource::new(path.clone()))
        }
        None => Arc::new(BundledFallbackSource::new()),
    };

    let loader = Arc::new(HoldingsLoader::new(
        provider,
        fallback,
        Arc::new(EventBusLoadObserver::new(event_bus.clone())),
        LoaderConfig::new(config.holdings_url.clone()),
    ));
    tracing::info!("Holdings endpoint: {}", config.holdings_url);

    Ok(Arc::new(AppState {
        loader,
        store: Arc::new(SnapshotStore::new()),
        event_bus,
    }))
}
