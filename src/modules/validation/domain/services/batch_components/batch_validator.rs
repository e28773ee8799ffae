use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::log_warn;
use crate::modules::reachability::ReachabilityChecker;
use crate::modules::validation::domain::entities::ValidationRecord;
use crate::shared::utils::logger::LogContext;

use super::types::BatchOutcome;

/// Sequential batch validation pipeline.
///
/// Records are processed strictly one at a time in input order; the only
/// suspension point is the reachability check. Format-invalid records are
/// settled without invoking the checker, and a checker failure downgrades
/// to "unreachable" instead of aborting the batch. The cancellation token
/// is consulted between records; `Done` records are never reprocessed, so
/// a later run resumes where a cancelled one stopped.
pub struct BatchValidator {
    checker: Arc<dyn ReachabilityChecker>,
}

impl BatchValidator {
    pub fn new(checker: Arc<dyn ReachabilityChecker>) -> Self {
        Self { checker }
    }

    /// Run the pipeline over `records`, invoking `on_progress(completed,
    /// total, record)` after each record completes. Returns the full
    /// sequence in input order.
    pub async fn run(
        &self,
        mut records: Vec<ValidationRecord>,
        cancel: CancellationToken,
        mut on_progress: impl FnMut(usize, usize, &ValidationRecord),
    ) -> BatchOutcome {
        let total = records.len();
        let mut completed = records.iter().filter(|r| r.is_done()).count();
        let mut cancelled = false;

        for record in records.iter_mut() {
            if record.is_done() {
                continue;
            }
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            record.begin();
            LogContext::validation_progress(completed + 1, total, &record.number);

            let reachable = if record.is_valid_format {
                match self.checker.check_reachable(&record.number).await {
                    Ok(reachable) => reachable,
                    Err(e) => {
                        log_warn!(
                            "Reachability check failed for '{}', treating as unreachable: {}",
                            record.number,
                            e
                        );
                        false
                    }
                }
            } else {
                false
            };

            record.complete(reachable);
            completed += 1;
            on_progress(completed, total, record);
        }

        BatchOutcome {
            completed: u32::try_from(completed).unwrap_or(u32::MAX),
            cancelled,
            records,
        }
    }
}
