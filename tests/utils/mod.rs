#![allow(dead_code)]

pub mod factories;
pub mod mocks;

/// Initialize logging for tests. Safe to call from every test; the
/// underlying initializer is `Once`-guarded.
pub fn init_test_logging() {
    zapcheck_lib::shared::utils::init_logger();
}
