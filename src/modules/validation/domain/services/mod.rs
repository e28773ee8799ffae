pub mod batch_components;
mod e164_validator;

pub use batch_components::{BatchOutcome, BatchValidator, ProgressTracker, ValidationProgress};
pub use e164_validator::E164Validator;
