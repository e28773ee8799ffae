pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::ReachabilityChecker;
pub use infrastructure::{SimulatedChecker, SimulatedCheckerConfig};
