//! Test modules for the encoded-field parsers

mod bounding_box_tests;
mod lists_tests;

use crate::app::models::CellValue;

/// Shorthand for building a text cell in tests
pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}
