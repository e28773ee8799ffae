use serde::{Deserialize, Serialize};
use specta::Type;

use crate::modules::validation::domain::entities::ValidationRecord;

/// Final result of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct BatchOutcome {
    /// Full record sequence, in input order.
    pub records: Vec<ValidationRecord>,
    /// Records in `Done` state when the run finished.
    pub completed: u32,
    /// True when the run stopped early because cancellation was requested.
    pub cancelled: bool,
}

/// Payload of the `validation_progress` event, emitted after each record
/// completes. The frontend renders the percentage and the live table row
/// from this.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ValidationProgress {
    pub current: usize,
    pub total: usize,
    pub current_number: String,
    pub reachable_count: usize,
    pub unreachable_count: usize,
    pub invalid_count: usize,
}
