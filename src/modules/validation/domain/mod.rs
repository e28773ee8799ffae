pub mod entities;
pub mod services;

// Re-exports for easy access
pub use entities::{RecordState, SessionStats, ValidationRecord, ValidationSession};
pub use services::{BatchOutcome, BatchValidator, E164Validator, ValidationProgress};
