use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

use crate::log_warn;
use crate::modules::reachability::domain::ReachabilityChecker;
use crate::modules::validation::domain::services::E164Validator;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

/// Tuning knobs for the simulated checker.
///
/// Values can be overridden through `ZAPCHECK_SIM_MIN_DELAY_MS`,
/// `ZAPCHECK_SIM_MAX_DELAY_MS` and `ZAPCHECK_SIM_REACHABLE_RATE`;
/// unparsable or inconsistent overrides fall back to the defaults.
#[derive(Debug, Clone)]
pub struct SimulatedCheckerConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub reachable_rate: f64,
}

impl Default for SimulatedCheckerConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 500,
            max_delay_ms: 2500,
            reachable_rate: 0.7,
        }
    }
}

impl SimulatedCheckerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self::resolve(
            read_env("ZAPCHECK_SIM_MIN_DELAY_MS", defaults.min_delay_ms),
            read_env("ZAPCHECK_SIM_MAX_DELAY_MS", defaults.max_delay_ms),
            read_env("ZAPCHECK_SIM_REACHABLE_RATE", defaults.reachable_rate),
        )
    }

    fn resolve(min_delay_ms: u64, max_delay_ms: u64, reachable_rate: f64) -> Self {
        if min_delay_ms >= max_delay_ms || !(0.0..=1.0).contains(&reachable_rate) {
            log_warn!(
                "Inconsistent simulated checker overrides (delay {}..{}, rate {}), using defaults",
                min_delay_ms,
                max_delay_ms,
                reachable_rate
            );
            return Self::default();
        }

        Self {
            min_delay_ms,
            max_delay_ms,
            reachable_rate,
        }
    }
}

fn read_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

/// Stand-in for a real messaging-platform lookup API.
///
/// Suspends for a uniformly random interval, then reports the number as
/// reachable with a fixed probability. Format-invalid numbers are
/// answered `false` immediately, without the simulated round trip.
pub struct SimulatedChecker {
    config: SimulatedCheckerConfig,
    validator: E164Validator,
}

impl SimulatedChecker {
    pub fn new(config: SimulatedCheckerConfig) -> Self {
        Self {
            config,
            validator: E164Validator::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(SimulatedCheckerConfig::from_env())
    }
}

impl Default for SimulatedChecker {
    fn default() -> Self {
        Self::new(SimulatedCheckerConfig::default())
    }
}

#[async_trait]
impl ReachabilityChecker for SimulatedChecker {
    async fn check_reachable(&self, number: &str) -> AppResult<bool> {
        if !self.validator.is_valid(number) {
            return Ok(false);
        }

        // ThreadRng is not Send, keep it out of scope across the await.
        let delay_ms =
            rand::thread_rng().gen_range(self.config.min_delay_ms..self.config.max_delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let reachable = rand::thread_rng().gen_bool(self.config.reachable_rate);
        LogContext::check_operation(number, Some(reachable), Some(delay_ms));
        Ok(reachable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config(reachable_rate: f64) -> SimulatedCheckerConfig {
        SimulatedCheckerConfig {
            min_delay_ms: 0,
            max_delay_ms: 1,
            reachable_rate,
        }
    }

    #[tokio::test]
    async fn invalid_format_is_unreachable_without_delay() {
        let checker = SimulatedChecker::new(SimulatedCheckerConfig::default());
        let result = tokio::time::timeout(
            Duration::from_millis(100),
            checker.check_reachable("not-a-number"),
        )
        .await
        .expect("invalid input must be answered without the simulated delay");
        assert_eq!(result.unwrap(), false);
    }

    #[tokio::test]
    async fn rate_one_always_reachable() {
        let checker = SimulatedChecker::new(instant_config(1.0));
        for _ in 0..10 {
            assert!(checker.check_reachable("+5511999999999").await.unwrap());
        }
    }

    #[tokio::test]
    async fn rate_zero_never_reachable() {
        let checker = SimulatedChecker::new(instant_config(0.0));
        for _ in 0..10 {
            assert!(!checker.check_reachable("+5511999999999").await.unwrap());
        }
    }

    #[test]
    fn inconsistent_overrides_fall_back_to_defaults() {
        let inverted = SimulatedCheckerConfig::resolve(900, 100, 0.7);
        assert_eq!(inverted.min_delay_ms, 500);
        assert_eq!(inverted.max_delay_ms, 2500);

        let bad_rate = SimulatedCheckerConfig::resolve(500, 2500, 1.5);
        assert!((bad_rate.reachable_rate - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn consistent_overrides_are_kept() {
        let config = SimulatedCheckerConfig::resolve(10, 20, 0.5);
        assert_eq!(config.min_delay_ms, 10);
        assert_eq!(config.max_delay_ms, 20);
        assert!((config.reachable_rate - 0.5).abs() < f64::EPSILON);
    }
}
