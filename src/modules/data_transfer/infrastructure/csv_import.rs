use csv::ReaderBuilder;
use std::path::Path;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

/// CSV number list importer.
///
/// The file contract is loose on purpose: the first line is a header and
/// is discarded, blank lines are skipped, and only the first delimited
/// field of each remaining line matters. Quote interpretation is disabled
/// so spreadsheet quirks pass through untouched.
pub struct CsvImporter {
    delimiter: u8,
}

impl CsvImporter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Read a number list from `path`.
    ///
    /// Distinguishes the three user-facing failure modes: wrong file
    /// type (`InvalidInput`), unreadable file (`FileError`) and a file
    /// with no usable numbers (`ValidationError`).
    pub async fn read_numbers(&self, path: &Path) -> AppResult<Vec<String>> {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            return Err(AppError::InvalidInput(format!(
                "Expected a .csv file, got '{}'",
                path.display()
            )));
        }

        let bytes = tokio::fs::read(path).await?;
        // Spreadsheet exports are frequently Latin-1; replace what does
        // not decode instead of failing the whole import.
        let content = String::from_utf8_lossy(&bytes);

        let numbers = self.parse_content(&content)?;
        if numbers.is_empty() {
            return Err(AppError::ValidationError(
                "No phone numbers found in file".to_string(),
            ));
        }

        LogContext::file_operation("import", &path.display().to_string(), Some(numbers.len()));
        Ok(numbers)
    }

    /// Parse raw CSV content into the ordered number list.
    pub fn parse_content(&self, content: &str) -> AppResult<Vec<String>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(content.as_bytes());

        let mut numbers = Vec::new();
        for result in reader.records() {
            let record = result?;
            if let Some(first) = record.get(0) {
                let number = first.trim();
                if !number.is_empty() {
                    numbers.push(number.to_string());
                }
            }
        }

        Ok(numbers)
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discards_header_and_blank_lines() {
        let importer = CsvImporter::new();
        let content = "numero,nome\n+5511999999999,Ana\n\n+12025550123,Bob\n";
        let numbers = importer.parse_content(content).unwrap();
        assert_eq!(numbers, vec!["+5511999999999", "+12025550123"]);
    }

    #[test]
    fn takes_only_the_first_field() {
        let importer = CsvImporter::new();
        let content = "numero\n+5511999999999,extra,fields\n";
        let numbers = importer.parse_content(content).unwrap();
        assert_eq!(numbers, vec!["+5511999999999"]);
    }

    #[test]
    fn keeps_malformed_numbers_verbatim() {
        let importer = CsvImporter::new();
        let content = "numero\nnot-a-number\n+0123\n";
        let numbers = importer.parse_content(content).unwrap();
        assert_eq!(numbers, vec!["not-a-number", "+0123"]);
    }

    #[test]
    fn quoting_is_not_interpreted() {
        let importer = CsvImporter::new();
        let content = "numero\n\"+5511999999999\"\n";
        let numbers = importer.parse_content(content).unwrap();
        assert_eq!(numbers, vec!["\"+5511999999999\""]);
    }

    #[test]
    fn header_only_file_yields_no_numbers() {
        let importer = CsvImporter::new();
        let numbers = importer.parse_content("numero,nome\n").unwrap();
        assert!(numbers.is_empty());
    }

    #[tokio::test]
    async fn rejects_non_csv_extension() {
        let importer = CsvImporter::new();
        let result = importer.read_numbers(Path::new("numbers.txt")).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn missing_file_is_a_file_error() {
        let importer = CsvImporter::new();
        let result = importer
            .read_numbers(Path::new("/definitely/not/here.csv"))
            .await;
        assert!(matches!(result, Err(AppError::FileError(_))));
    }
}
