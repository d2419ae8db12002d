//! Bounding box extraction
//!
//! The bounding box cell is a complete keyed block over the four compass
//! bound keys; every value must convert to a decimal degree.

use crate::app::models::{BoundingBox, CellValue};
use crate::constants::BOUNDING_BOX_KEYS;
use crate::{Error, Result};

use super::keyed_block::parse_keyed_block;

/// Parse a bounding box cell into its four numeric bounds.
///
/// All four bounds are required; a conversion failure names the malformed
/// value and its key.
pub fn parse_bounding_box(raw: &CellValue, field: &str) -> Result<BoundingBox> {
    let block = parse_keyed_block(raw, field, BOUNDING_BOX_KEYS, true)?
        .ok_or_else(|| Error::field_parse(field, "bounding box cell is empty"))?;

    let bound = |key: &str| -> Result<f64> {
        let value = block
            .get(key)
            .ok_or_else(|| Error::field_parse(field, format!("missing required key '{}'", key)))?;

        value.trim().parse::<f64>().map_err(|_| {
            Error::field_parse(
                field,
                format!("invalid numeric value '{}' for {}", value, key),
            )
        })
    };

    Ok(BoundingBox {
        north: bound("northBoundLatitude")?,
        south: bound("southBoundLatitude")?,
        east: bound("eastBoundLongitude")?,
        west: bound("westBoundLongitude")?,
    })
}
