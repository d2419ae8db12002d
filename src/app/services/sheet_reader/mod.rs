//! Master sheet ingestion
//!
//! Reads a metadata master sheet into raw rows. Excel workbooks are the
//! primary source; CSV exports of the same sheet are also accepted. Cell
//! typing happens here, at the ingestion boundary: every cell becomes a
//! [`CellValue`] variant and downstream parsers never inspect runtime types.
//!
//! ## Architecture
//!
//! - [`excel`] - workbook reading via calamine
//! - [`csv_reader`] - CSV export reading
//!
//! [`CellValue`]: crate::app::models::CellValue

pub mod csv_reader;
pub mod excel;

use crate::app::models::RawRow;
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Read all data rows of a master sheet file.
///
/// The reader is selected by file extension; `sheet` names the worksheet for
/// workbook formats and is ignored for CSV input.
pub fn read_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<RawRow>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let rows = match extension.as_str() {
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => excel::read_workbook_rows(path, sheet)?,
        "csv" => csv_reader::read_csv_rows(path)?,
        other => {
            return Err(Error::configuration(format!(
                "Unsupported sheet file extension '{}': expected an Excel workbook or CSV export",
                other
            )));
        }
    };

    info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
