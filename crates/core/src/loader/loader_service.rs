use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

use tickerbook_market_data::HoldingsProvider;

use crate::events::LoadObserver;
use crate::portfolio::holdings::Holding;
use crate::portfolio::snapshot::PortfolioSnapshot;

use super::fallback::FallbackSource;
use super::loader_model::{BannerCategory, CycleId, LoadOutcome};

/// Settings the loader needs from the application.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Absolute URL of the holdings API.
    pub endpoint: String,
}

impl LoaderConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
pub trait HoldingsLoaderTrait: Send + Sync {
    /// Runs one load cycle and returns its outcome.
    ///
    /// Never fails: any gateway error is absorbed into a fallback outcome.
    async fn load(&self) -> LoadOutcome {
        self.load_cycle().await.1
    }

    /// Same as [`load`](Self::load), also returning the cycle identity so
    /// callers can discard results that were overtaken by a newer cycle.
    async fn load_cycle(&self) -> (CycleId, LoadOutcome);

    /// Number of cycles currently between start and finish.
    fn in_flight(&self) -> usize;

    fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }
}

/// Remote-first holdings loader with static fallback.
///
/// Each cycle notifies the observer in a fixed order: started, then (after
/// the remote call and, on failure, the fallback read) finished, then the
/// outcome. Overlapping calls run independent cycles; nothing is shared or
/// de-duplicated between them.
pub struct HoldingsLoader {
    provider: Arc<dyn HoldingsProvider>,
    fallback: Arc<dyn FallbackSource>,
    observer: Arc<dyn LoadObserver>,
    config: LoaderConfig,
    last_cycle: AtomicU64,
    in_flight: AtomicUsize,
}

/// Decrements the in-flight counter even if the cycle future is dropped.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl HoldingsLoader {
    pub fn new(
        provider: Arc<dyn HoldingsProvider>,
        fallback: Arc<dyn FallbackSource>,
        observer: Arc<dyn LoadObserver>,
        config: LoaderConfig,
    ) -> Self {
        Self {
            provider,
            fallback,
            observer,
            config,
            last_cycle: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    fn next_cycle(&self) -> CycleId {
        CycleId(self.last_cycle.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn resolve(&self, cycle: CycleId) -> LoadOutcome {
        match self.provider.fetch(&self.config.endpoint).await {
            Ok(payload) => {
                let holdings: Vec<Holding> =
                    payload.into_holdings().into_iter().map(Holding::from).collect();
                debug!(
                    "Cycle {}: {} returned {} holdings",
                    cycle,
                    self.provider.id(),
                    holdings.len()
                );
                LoadOutcome::Succeeded(PortfolioSnapshot::new(holdings))
            }
            Err(error) => {
                let banner = BannerCategory::from(&error);
                warn!(
                    "Cycle {}: {} failed ({}), showing fallback data with {} banner",
                    cycle,
                    self.provider.id(),
                    error,
                    banner
                );
                let holdings = self.fallback.load_fallback();
                LoadOutcome::FellBack(PortfolioSnapshot::new(holdings), banner)
            }
        }
    }
}

#[async_trait]
impl HoldingsLoaderTrait for HoldingsLoader {
    async fn load_cycle(&self) -> (CycleId, LoadOutcome) {
        let cycle = self.next_cycle();

        let outcome = {
            let _guard = InFlightGuard::enter(&self.in_flight);
            self.observer.on_load_started(cycle);
            self.resolve(cycle).await
        };

        self.observer.on_load_finished(cycle);
        self.observer.on_result(cycle, &outcome);

        info!(
            "Cycle {} finished: {:?} with {} holdings",
            cycle,
            outcome.source(),
            outcome.holdings().len()
        );
        (cycle, outcome)
    }

    fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}
