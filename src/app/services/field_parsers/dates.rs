//! Date and timestamp parsing
//!
//! Sheet cells carry dates as typed date cells, as text in a handful of
//! formats, or as bare numeric years. Each parser tries its fixed format
//! list in order and fails only once every format is exhausted.

use crate::app::models::CellValue;
use crate::constants::{
    EXTENT_DATE_FORMATS, MAX_BARE_YEAR, METADATA_TIMESTAMP_FORMAT, MIN_BARE_YEAR,
    PUBLICATION_DATE_FORMATS,
};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Parse the publication date cell.
///
/// Accepts typed date cells unchanged, text in year-month-day or
/// day-month-year order, and bare years (text or numeric).
pub fn parse_publication_date(raw: &CellValue, field: &str) -> Result<NaiveDateTime> {
    match raw {
        CellValue::Date(dt) => Ok(*dt),
        CellValue::Number(_) => {
            let year = raw
                .as_integral()
                .ok_or_else(|| Error::datetime_parsing(raw.display_text()))?;
            bare_year(&year.to_string()).ok_or_else(|| Error::datetime_parsing(raw.display_text()))
        }
        CellValue::Text(s) => {
            let text = s.trim();
            date_from_formats(text, PUBLICATION_DATE_FORMATS)
                .or_else(|| bare_year(text))
                .ok_or_else(|| Error::datetime_parsing(text))
        }
        CellValue::Empty => Err(Error::field_parse(field, "date value is required")),
    }
}

/// Parse a temporal extent start/end cell.
///
/// Accepts typed date cells, text with an optional time component, and bare
/// numeric years.
pub fn parse_extent_date(raw: &CellValue, field: &str) -> Result<NaiveDateTime> {
    match raw {
        CellValue::Date(dt) => Ok(*dt),
        CellValue::Number(_) => {
            let year = raw
                .as_integral()
                .ok_or_else(|| Error::datetime_parsing(raw.display_text()))?;
            bare_year(&year.to_string()).ok_or_else(|| Error::datetime_parsing(raw.display_text()))
        }
        CellValue::Text(s) => {
            let text = s.trim();
            datetime_from_formats(text, EXTENT_DATE_FORMATS)
                .or_else(|| bare_year(text))
                .ok_or_else(|| Error::datetime_parsing(text))
        }
        CellValue::Empty => Err(Error::field_parse(field, "extent date value is required")),
    }
}

/// Parse the metadata timestamp cell.
///
/// The timestamp column is strictly year-month-day. A blank cell or the
/// spreadsheet "NaT" sentinel yields `None`; the caller logs and omits the
/// timestamp rather than failing the record.
pub fn parse_metadata_timestamp(raw: &CellValue, _field: &str) -> Result<Option<NaiveDateTime>> {
    match raw {
        CellValue::Empty => Ok(None),
        CellValue::Date(dt) => Ok(Some(*dt)),
        CellValue::Text(s) => {
            let text = s.trim();
            if text.is_empty() || text == "NaT" {
                return Ok(None);
            }
            NaiveDate::parse_from_str(text, METADATA_TIMESTAMP_FORMAT)
                .map(|d| Some(midnight(d)))
                .map_err(|_| Error::datetime_parsing(text))
        }
        other => Err(Error::datetime_parsing(other.display_text())),
    }
}

/// Try each date-only format in order, returning the first successful parse
fn date_from_formats(text: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(midnight)
}

/// Try each format in order, accepting both date-time and date-only formats
fn datetime_from_formats(text: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(text, fmt)
            .ok()
            .or_else(|| NaiveDate::parse_from_str(text, fmt).ok().map(midnight))
    })
}

/// Interpret a bare year as January 1st of that year
fn bare_year(text: &str) -> Option<NaiveDateTime> {
    let year: i32 = text.parse().ok()?;
    if !(MIN_BARE_YEAR..=MAX_BARE_YEAR).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, 1, 1).map(midnight)
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is always valid")
}
