use tauri_specta::collect_commands;

// Import all command modules
use crate::modules::{data_transfer::commands::*, validation::commands::*};

/// Single source of truth for all Tauri commands
/// This eliminates the catastrophic manual synchronization requirement
/// between specta_builder and tauri::generate_handler!
pub fn get_all_commands() -> tauri_specta::Commands<tauri::Wry> {
    collect_commands![
        // Import/export commands
        import_numbers,
        export_results,
        // Validation commands
        start_validation,
        cancel_validation,
        get_validation_results,
        get_session_stats,
    ]
}

/// Generate the handler list with all commands imported
#[macro_export]
macro_rules! generate_handler_list {
    () => {{
        use crate::modules::{data_transfer::commands::*, validation::commands::*};

        tauri::generate_handler![
            // Import/export commands
            import_numbers,
            export_results,
            // Validation commands
            start_validation,
            cancel_validation,
            get_validation_results,
            get_session_stats,
        ]
    }};
}
