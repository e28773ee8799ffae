use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;
use tokio::sync::Semaphore;

use zapcheck_lib::modules::reachability::ReachabilityChecker;
use zapcheck_lib::shared::errors::AppResult;

mock! {
    pub Checker {}

    #[async_trait]
    impl ReachabilityChecker for Checker {
        async fn check_reachable(&self, number: &str) -> AppResult<bool>;
    }
}

/// Checker that answers instantly with a fixed outcome.
pub struct StaticChecker {
    pub reachable: bool,
}

#[async_trait]
impl ReachabilityChecker for StaticChecker {
    async fn check_reachable(&self, _number: &str) -> AppResult<bool> {
        Ok(self.reachable)
    }
}

/// Checker that records how many calls are in flight at once.
pub struct ConcurrencyProbeChecker {
    in_flight: Arc<std::sync::atomic::AtomicUsize>,
    max_in_flight: Arc<std::sync::atomic::AtomicUsize>,
}

impl ConcurrencyProbeChecker {
    pub fn new() -> (Self, Arc<std::sync::atomic::AtomicUsize>) {
        let max = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        (
            Self {
                in_flight: Arc::new(std::sync::atomic::AtomicUsize::new(0)),
                max_in_flight: max.clone(),
            },
            max,
        )
    }
}

#[async_trait]
impl ReachabilityChecker for ConcurrencyProbeChecker {
    async fn check_reachable(&self, _number: &str) -> AppResult<bool> {
        use std::sync::atomic::Ordering;

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(true)
    }
}

/// Checker that blocks until the test hands it a permit, so tests can
/// observe the pipeline mid-flight.
pub struct GatedChecker {
    gate: Arc<Semaphore>,
}

impl GatedChecker {
    pub fn new() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        (Self { gate: gate.clone() }, gate)
    }
}

#[async_trait]
impl ReachabilityChecker for GatedChecker {
    async fn check_reachable(&self, _number: &str) -> AppResult<bool> {
        let permit = self
            .gate
            .acquire()
            .await
            .expect("gate semaphore closed during test");
        permit.forget();
        Ok(true)
    }
}
