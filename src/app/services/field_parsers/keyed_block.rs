//! Flat keyed-block parsing
//!
//! A keyed block is a pipe-separated sequence of `key:value` segments forming
//! one flat mapping. The same convention carries bounding boxes, online
//! resource descriptors, reference system names, and related-identifier
//! triples; the caller supplies the declared key set.

use crate::app::models::CellValue;
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Parse a keyed-block cell against a declared key set.
///
/// Values are split on the first colon only, so URLs and other colon-bearing
/// values survive intact. Keys are whitespace-stripped before matching;
/// segments with an empty key are skipped. An unknown key fails the field.
/// When `complete` is set, every declared key must be present after parsing.
///
/// A blank cell yields `None` rather than an error; the caller decides
/// whether an absent block is acceptable for its field.
pub fn parse_keyed_block(
    raw: &CellValue,
    field: &str,
    declared: &[&str],
    complete: bool,
) -> Result<Option<BTreeMap<String, String>>> {
    let text = match raw {
        CellValue::Empty => return Ok(None),
        CellValue::Text(s) => s,
        other => {
            return Err(Error::field_parse(
                field,
                format!(
                    "expected encoded key:value text, got non-text cell '{}'",
                    other.display_text()
                ),
            ));
        }
    };

    let mut block = BTreeMap::new();
    for segment in text.split('|') {
        let (key, value) = match segment.split_once(':') {
            Some((k, v)) => (k, v),
            None => (segment, ""),
        };

        let key = key.replace(' ', "");
        if key.is_empty() {
            continue;
        }

        if !declared.contains(&key.as_str()) {
            return Err(Error::field_parse(
                field,
                format!("unknown key in segment '{}'", segment.trim()),
            ));
        }

        block.insert(key, value.trim().to_string());
    }

    if complete {
        for key in declared {
            if !block.contains_key(*key) {
                return Err(Error::field_parse(
                    field,
                    format!("missing required key '{}'", key),
                ));
            }
        }
    }

    Ok(Some(block))
}
