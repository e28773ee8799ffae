use crate::modules::validation::application::ValidationService;
use crate::modules::validation::domain::entities::{SessionStats, ValidationRecord};
use crate::modules::validation::domain::services::batch_components::BatchOutcome;
use crate::{log_debug, log_info};
use std::sync::Arc;
use tauri::State;

#[tauri::command]
#[specta::specta]
pub async fn start_validation(
    validation_service: State<'_, Arc<ValidationService>>,
    app_handle: tauri::AppHandle,
) -> Result<BatchOutcome, String> {
    let result = validation_service
        .start_validation(Some(app_handle))
        .await
        .map_err(|e| e.to_string());

    match &result {
        Ok(outcome) => {
            log_info!(
                "Validation run finished - Completed: {}, Cancelled: {}",
                outcome.completed,
                outcome.cancelled
            );
        }
        Err(e) => {
            log_debug!("Validation run failed with error: {}", e);
        }
    }

    result
}

#[tauri::command]
#[specta::specta]
pub async fn cancel_validation(
    validation_service: State<'_, Arc<ValidationService>>,
) -> Result<bool, String> {
    Ok(validation_service.cancel_validation())
}

#[tauri::command]
#[specta::specta]
pub async fn get_validation_results(
    validation_service: State<'_, Arc<ValidationService>>,
) -> Result<Vec<ValidationRecord>, String> {
    validation_service.results().map_err(|e| e.to_string())
}

#[tauri::command]
#[specta::specta]
pub async fn get_session_stats(
    validation_service: State<'_, Arc<ValidationService>>,
) -> Result<SessionStats, String> {
    validation_service.stats().map_err(|e| e.to_string())
}
