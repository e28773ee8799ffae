mod csv_export;
mod csv_import;

pub use csv_export::{CsvExporter, EXPORT_HEADER};
pub use csv_import::CsvImporter;
