pub mod commands;
pub mod infrastructure;

// Re-exports for easy external access
pub use infrastructure::{CsvExporter, CsvImporter, EXPORT_HEADER};
