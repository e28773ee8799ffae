use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio_util::sync::CancellationToken;

use crate::modules::reachability::ReachabilityChecker;
use crate::modules::validation::domain::entities::{
    SessionStats, ValidationRecord, ValidationSession,
};
use crate::modules::validation::domain::services::batch_components::{
    BatchOutcome, BatchValidator, ProgressTracker, ValidationProgress,
};
use crate::modules::validation::domain::services::E164Validator;
use crate::modules::validation::infrastructure::SessionStore;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use crate::{log_info, log_warn};

/// Validation service - unified interface over the session store, the
/// format validator, the reachability checker and the batch pipeline.
///
/// Holds the run guard and the cancellation token for the active run, so
/// at most one pipeline is in flight and imports never race against it.
pub struct ValidationService {
    store: Arc<SessionStore>,
    checker: Arc<dyn ReachabilityChecker>,
    validator: E164Validator,
    run_active: AtomicBool,
    cancel: Mutex<Option<CancellationToken>>,
}

impl ValidationService {
    pub fn new(store: Arc<SessionStore>, checker: Arc<dyn ReachabilityChecker>) -> Self {
        Self {
            store,
            checker,
            validator: E164Validator::new(),
            run_active: AtomicBool::new(false),
            cancel: Mutex::new(None),
        }
    }

    /// Build a fresh session from raw imported numbers, replacing the
    /// previous one wholesale. Format validity is computed here, once,
    /// and is immutable afterwards.
    pub fn load_numbers(
        &self,
        numbers: Vec<String>,
        source_file: Option<String>,
    ) -> AppResult<ValidationSession> {
        if self.run_active.load(Ordering::SeqCst) {
            return Err(AppError::Conflict(
                "Cannot import while a validation run is active".to_string(),
            ));
        }
        if numbers.is_empty() {
            return Err(AppError::ValidationError(
                "No phone numbers to load".to_string(),
            ));
        }

        let records: Vec<ValidationRecord> = numbers
            .into_iter()
            .map(|number| {
                let is_valid = self.validator.is_valid(&number);
                ValidationRecord::new(number, is_valid)
            })
            .collect();

        let session = ValidationSession::new(records, source_file);
        log_info!(
            "Loaded session {} with {} numbers ({} format-valid)",
            session.id,
            session.records.len(),
            session.stats().valid_format
        );
        self.store.replace(session.clone());
        Ok(session)
    }

    /// Run the batch pipeline over the current session, emitting a
    /// `validation_progress` event after each record. Returns once every
    /// record is `Done` or cancellation stopped the run.
    pub async fn start_validation(
        &self,
        app_handle: Option<tauri::AppHandle>,
    ) -> AppResult<BatchOutcome> {
        if self.run_active.swap(true, Ordering::SeqCst) {
            return Err(AppError::Conflict(
                "A validation run is already active".to_string(),
            ));
        }

        let result = self.run_batch(app_handle).await;

        self.set_cancel(None);
        self.run_active.store(false, Ordering::SeqCst);
        result
    }

    async fn run_batch(&self, app_handle: Option<tauri::AppHandle>) -> AppResult<BatchOutcome> {
        let timer = TimedOperation::new("validate_batch");
        let records = self.store.records()?;
        let total = records.len();

        let token = CancellationToken::new();
        self.set_cancel(Some(token.clone()));

        log_info!("Starting batch validation for {} numbers", total);

        let tracker = ProgressTracker::new(app_handle);

        // Counters survive a resumed run: seed them from records that are
        // already Done.
        let mut reachable_count = 0usize;
        let mut unreachable_count = 0usize;
        let mut invalid_count = 0usize;
        for record in records.iter().filter(|r| r.is_done()) {
            Self::count_record(
                record,
                &mut reachable_count,
                &mut unreachable_count,
                &mut invalid_count,
            );
        }

        tracker.emit_validation_progress(ValidationProgress {
            current: records.iter().filter(|r| r.is_done()).count(),
            total,
            current_number: String::new(),
            reachable_count,
            unreachable_count,
            invalid_count,
        });

        let pipeline = BatchValidator::new(self.checker.clone());
        let outcome = pipeline
            .run(records, token, |completed, total, record| {
                Self::count_record(
                    record,
                    &mut reachable_count,
                    &mut unreachable_count,
                    &mut invalid_count,
                );
                tracker.emit_validation_progress(ValidationProgress {
                    current: completed,
                    total,
                    current_number: record.number.clone(),
                    reachable_count,
                    unreachable_count,
                    invalid_count,
                });
            })
            .await;

        self.store.store_records(outcome.records.clone())?;

        if outcome.cancelled {
            log_warn!(
                "Batch validation cancelled after {} of {} records",
                outcome.completed,
                total
            );
        } else {
            log_info!(
                "Batch validation completed: {} reachable, {} unreachable, {} invalid format",
                reachable_count,
                unreachable_count,
                invalid_count
            );
        }
        timer.finish_with_info(&format!("{} records", total));

        Ok(outcome)
    }

    fn count_record(
        record: &ValidationRecord,
        reachable: &mut usize,
        unreachable: &mut usize,
        invalid: &mut usize,
    ) {
        if !record.is_valid_format {
            *invalid += 1;
        } else {
            match record.reachable {
                Some(true) => *reachable += 1,
                _ => *unreachable += 1,
            }
        }
    }

    /// Request cancellation of the active run. Returns whether a run was
    /// active; the pipeline stops before the next record.
    pub fn cancel_validation(&self) -> bool {
        let guard = self.cancel.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(token) => {
                log_info!("Cancellation requested for active validation run");
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn results(&self) -> AppResult<Vec<ValidationRecord>> {
        self.store.records()
    }

    pub fn stats(&self) -> AppResult<SessionStats> {
        self.store.stats()
    }

    pub fn current_session(&self) -> Option<ValidationSession> {
        self.store.current()
    }

    fn set_cancel(&self, token: Option<CancellationToken>) {
        let mut guard = self.cancel.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = token;
    }
}
