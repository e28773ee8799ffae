use crate::log_error;
use std::sync::Arc;
use tauri::Emitter;

use super::types::ValidationProgress;

/// Forwards pipeline progress to the frontend.
///
/// Events go out once per completed record; batch sizes in this app are
/// small enough that percentage-based batching would only hide rows from
/// the live table. Without an app handle (tests, headless runs) emission
/// is a no-op.
#[derive(Clone)]
pub struct ProgressTracker {
    app_handle: Option<Arc<tauri::AppHandle>>,
}

impl ProgressTracker {
    pub fn new(app_handle: Option<tauri::AppHandle>) -> Self {
        Self {
            app_handle: app_handle.map(Arc::new),
        }
    }

    pub fn emit_validation_progress(&self, progress: ValidationProgress) -> bool {
        if let Some(ref app) = self.app_handle {
            match app.emit("validation_progress", &progress) {
                Ok(_) => true,
                Err(e) => {
                    log_error!("Failed to emit validation progress: {}", e);
                    false
                }
            }
        } else {
            false
        }
    }
}
