pub mod batch_validator;
pub mod progress_tracker;
pub mod types;

// Re-export main types for public API
pub use batch_validator::BatchValidator;
pub use progress_tracker::ProgressTracker;
pub use types::*;
