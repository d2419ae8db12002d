//! Excel workbook reading
//!
//! Opens a workbook, locates the header row, and converts every data row
//! into a raw row of typed cells. The first non-empty row is the header;
//! rows with no content at all are skipped.

use crate::app::models::{CellValue, RawRow};
use crate::{Error, Result};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Read all data rows from one worksheet of a workbook.
///
/// Uses the named sheet when given, otherwise the first sheet in the
/// workbook.
pub fn read_workbook_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<RawRow>> {
    let file_label = path.display().to_string();

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::sheet_read(&file_label, format!("cannot open workbook: {}", e)))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| Error::sheet_read(&file_label, "workbook has no sheets"))?,
    };

    let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
        Error::sheet_read(
            &file_label,
            format!("cannot read sheet '{}': {}", sheet_name, e),
        )
    })?;

    let (header_index, headers) = find_header_row(&range)
        .ok_or_else(|| Error::sheet_read(&file_label, "sheet has no non-empty header row"))?;

    debug!(
        "Sheet '{}': header at row {}, {} columns",
        sheet_name,
        header_index + 1,
        headers.len()
    );

    let mut rows = Vec::new();
    for (row_index, row) in range.rows().enumerate() {
        if row_index <= header_index {
            continue;
        }
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let mut cells = HashMap::new();
        for (column_index, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let cell = row.get(column_index).unwrap_or(&Data::Empty);
            cells.insert(header.clone(), convert_cell(cell));
        }

        // Report Excel-like one-based row numbers in diagnostics
        rows.push(RawRow::new(row_index + 1, cells));
    }

    Ok(rows)
}

/// Locate the first non-empty row and render its cells as header names
fn find_header_row(range: &calamine::Range<Data>) -> Option<(usize, Vec<String>)> {
    for (row_index, row) in range.rows().enumerate() {
        if row.iter().any(|cell| !matches!(cell, Data::Empty)) {
            let headers = row.iter().map(header_text).collect();
            return Some((row_index, headers));
        }
    }
    None
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Convert one workbook cell into its typed value
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::Date(naive),
            None => {
                warn!("Unconvertible datetime cell, treated as blank");
                CellValue::Empty
            }
        },
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => {
            warn!("Error cell '{:?}' treated as blank", e);
            CellValue::Empty
        }
    }
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
