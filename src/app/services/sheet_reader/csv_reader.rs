//! CSV export reading
//!
//! Reads a CSV export of the master sheet. CSV carries no cell typing, so
//! every non-blank cell is text; numeric identifier coercion happens later
//! in the normalizer.

use crate::app::models::{CellValue, RawRow};
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Read all data rows from a CSV export
pub fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file_label = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::csv_parsing(&file_label, "cannot open CSV file", Some(e)))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file_label, "cannot read CSV header", Some(e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(Error::csv_parsing(
            &file_label,
            "CSV file has no header row",
            None,
        ));
    }

    let mut rows = Vec::new();
    for (record_index, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| Error::csv_parsing(&file_label, "cannot read CSV record", Some(e)))?;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut cells = HashMap::new();
        for (column_index, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }

            let value = record.get(column_index).unwrap_or("");
            let cell = if value.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(value.to_string())
            };
            cells.insert(header.clone(), cell);
        }

        // Header is row 1, first data row is row 2
        rows.push(RawRow::new(record_index + 2, cells));
    }

    Ok(rows)
}
