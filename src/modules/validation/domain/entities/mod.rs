mod validation_record;
mod validation_session;

pub use validation_record::{RecordState, ValidationRecord};
pub use validation_session::{SessionStats, ValidationSession};
