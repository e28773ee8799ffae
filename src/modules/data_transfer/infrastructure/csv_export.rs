use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;

use crate::modules::validation::domain::entities::ValidationRecord;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

/// Fixed header row of the results file.
pub const EXPORT_HEADER: [&str; 4] = ["Número", "Formato E164", "WhatsApp Ativo", "Status"];

/// CSV results exporter.
///
/// One row per record in pipeline order, UTF-8, comma-separated, no
/// quoting. Booleans render as the localized `Sim`/`Não` tokens and the
/// status column is two-valued: `Concluído` for finished records,
/// `Pendente` for everything else.
pub struct CsvExporter {
    delimiter: u8,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub async fn write_results(
        &self,
        path: &Path,
        records: &[ValidationRecord],
    ) -> AppResult<usize> {
        let bytes = self.serialize(records)?;
        tokio::fs::write(path, bytes).await?;

        LogContext::file_operation("export", &path.display().to_string(), Some(records.len()));
        Ok(records.len())
    }

    /// Serialize the record sequence to CSV bytes. An empty sequence is
    /// an error: no file should be produced for it.
    pub fn serialize(&self, records: &[ValidationRecord]) -> AppResult<Vec<u8>> {
        if records.is_empty() {
            return Err(AppError::ValidationError(
                "No results to export".to_string(),
            ));
        }

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(QuoteStyle::Never)
            .from_writer(Vec::new());

        writer.write_record(EXPORT_HEADER)?;
        for record in records {
            writer.write_record([
                record.number.as_str(),
                yes_no(record.is_valid_format),
                yes_no(record.reachable.unwrap_or(false)),
                if record.is_done() {
                    "Concluído"
                } else {
                    "Pendente"
                },
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::InternalError(format!("CSV writer flush failed: {}", e)))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sim"
    } else {
        "Não"
    }
}
