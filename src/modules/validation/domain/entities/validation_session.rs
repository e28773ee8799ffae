use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use uuid::Uuid;

use super::validation_record::ValidationRecord;

/// The current working set of records.
///
/// A session is created wholesale at import time and replaced wholesale by
/// the next import; its records are mutated in place by the pipeline and
/// never deleted one by one.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ValidationSession {
    pub id: Uuid,
    /// Name of the file the numbers came from, when known.
    pub source_file: Option<String>,
    pub imported_at: DateTime<Utc>,
    pub records: Vec<ValidationRecord>,
}

impl ValidationSession {
    pub fn new(records: Vec<ValidationRecord>, source_file: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_file,
            imported_at: Utc::now(),
            records,
        }
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::from_records(&self.records)
    }
}

/// Aggregate counts derived from the record sequence, always recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SessionStats {
    pub total: u32,
    pub valid_format: u32,
    pub invalid_format: u32,
    pub reachable: u32,
    pub unreachable: u32,
    pub completed: u32,
    pub pending: u32,
}

impl SessionStats {
    pub fn from_records(records: &[ValidationRecord]) -> Self {
        let mut stats = Self {
            total: records.len() as u32,
            valid_format: 0,
            invalid_format: 0,
            reachable: 0,
            unreachable: 0,
            completed: 0,
            pending: 0,
        };

        for record in records {
            if record.is_valid_format {
                stats.valid_format += 1;
            } else {
                stats.invalid_format += 1;
            }
            match record.reachable {
                Some(true) => stats.reachable += 1,
                Some(false) => stats.unreachable += 1,
                None => {}
            }
            if record.is_done() {
                stats.completed += 1;
            } else {
                stats.pending += 1;
            }
        }

        stats
    }
}
