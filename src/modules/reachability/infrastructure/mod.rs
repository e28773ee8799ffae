mod simulated_checker;

pub use simulated_checker::{SimulatedChecker, SimulatedCheckerConfig};
