pub mod commands;
pub mod modules;
pub mod shared;

use commands::get_all_commands;
use modules::{
    reachability::{ReachabilityChecker, SimulatedChecker},
    validation::{application::ValidationService, infrastructure::SessionStore},
};
use std::sync::Arc;
use tauri::Manager;

// tauri-specta: generate TS types + typed command client from Rust commands
use specta_typescript::Typescript;
use tauri_specta::Builder as SpectaBuilder;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let specta_builder = SpectaBuilder::<tauri::Wry>::new().commands(get_all_commands());

    #[cfg(debug_assertions)]
    if let Err(e) = specta_builder.export(Typescript::default(), "../src/types/bindings.ts") {
        eprintln!("Warning: Failed to export TypeScript bindings: {}", e);
        eprintln!("TypeScript types may be out of sync. Consider running cargo build again.");
    }

    tauri::Builder::default()
        // Tell Tauri how to invoke commands from centralized registry
        .invoke_handler(crate::generate_handler_list!())
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_log::Builder::new()
                .clear_targets()
                .targets([tauri_plugin_log::Target::new(
                    tauri_plugin_log::TargetKind::Stdout,
                )])
                .level(log::LevelFilter::Debug)
                .format(|out, message, record| {
                    // Extract meaningful module name from path
                    let target = record.target();

                    if target.starts_with("zapcheck_lib::modules::") {
                        // Backend module: zapcheck_lib::modules::validation::commands -> [LEVEL] [BACKEND] [validation] message
                        let module = target
                            .strip_prefix("zapcheck_lib::modules::")
                            .and_then(|s| s.split("::").next())
                            .unwrap_or("");
                        out.finish(format_args!(
                            "[{}] [BACKEND] [{}] {}",
                            record.level(),
                            module,
                            message
                        ))
                    } else if target.starts_with("zapcheck_lib") {
                        // General backend: [LEVEL] [BACKEND] message
                        out.finish(format_args!("[{}] [BACKEND] {}", record.level(), message))
                    } else if target.starts_with("webview:") {
                        // Frontend logs: strip webview prefix, message already contains [FRONTEND] [module]
                        out.finish(format_args!("[{}] {}", record.level(), message))
                    } else {
                        // Other logs
                        out.finish(format_args!(
                            "[{}] [{}] {}",
                            record.level(),
                            target,
                            message
                        ))
                    }
                })
                .build(),
        )
        .setup(move |app| {
            // If you want typed events, mount specta's event hooks here.
            // `specta_builder` is moved into this closure (no later uses outside).
            specta_builder.mount_events(app);

            // The whole session lives in memory; the store is the only
            // shared state between commands.
            let session_store = Arc::new(SessionStore::new());

            // Stand-in for the real messaging-platform lookup API.
            let checker: Arc<dyn ReachabilityChecker> = Arc::new(SimulatedChecker::from_env());

            let validation_service = Arc::new(ValidationService::new(session_store, checker));

            app.manage(validation_service);

            log::info!("ZapCheck services initialized");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
