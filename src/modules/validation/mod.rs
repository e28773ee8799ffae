pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ValidationService;
pub use domain::{BatchValidator, E164Validator};
pub use infrastructure::SessionStore;

// Re-export common types for shorter imports
pub use domain::entities::{RecordState, SessionStats, ValidationRecord, ValidationSession};
pub use domain::services::batch_components::{BatchOutcome, ValidationProgress};
