use crate::modules::data_transfer::infrastructure::{CsvExporter, CsvImporter};
use crate::modules::validation::application::ValidationService;
use crate::modules::validation::domain::entities::ValidationSession;
use crate::{log_debug, log_info};
use serde::{Deserialize, Serialize};
use specta::Type;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tauri::State;

#[derive(Debug, Deserialize, Type)]
pub struct ImportNumbersRequest {
    pub path: String,
}

#[derive(Debug, Deserialize, Type)]
pub struct ExportResultsRequest {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Type)]
pub struct ExportOutcome {
    pub path: String,
    pub exported: u32,
}

#[tauri::command]
#[specta::specta]
pub async fn import_numbers(
    request: ImportNumbersRequest,
    validation_service: State<'_, Arc<ValidationService>>,
) -> Result<ValidationSession, String> {
    log_debug!("import_numbers command called for '{}'", request.path);

    let path = PathBuf::from(&request.path);
    let numbers = CsvImporter::new()
        .read_numbers(&path)
        .await
        .map_err(|e| e.to_string())?;

    let source_file = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(String::from);

    let session = validation_service
        .load_numbers(numbers, source_file)
        .map_err(|e| e.to_string())?;

    log_info!(
        "Imported {} numbers from '{}'",
        session.records.len(),
        request.path
    );
    Ok(session)
}

#[tauri::command]
#[specta::specta]
pub async fn export_results(
    request: ExportResultsRequest,
    validation_service: State<'_, Arc<ValidationService>>,
) -> Result<ExportOutcome, String> {
    let records = validation_service.results().map_err(|e| e.to_string())?;

    let exported = CsvExporter::new()
        .write_results(Path::new(&request.path), &records)
        .await
        .map_err(|e| e.to_string())?;

    log_info!("Exported {} records to '{}'", exported, request.path);
    Ok(ExportOutcome {
        path: request.path,
        exported: u32::try_from(exported).unwrap_or(u32::MAX),
    })
}
