//! Delimited list and keyword parsing

use crate::app::models::{CellValue, KeywordEntry};
use crate::constants::{DESCRIPTIVE_KEYWORD_KEYS, KEYWORD_TYPE_THEME};
use crate::{Error, Result};

use super::keyed_block::parse_keyed_block;

/// Parse a comma-separated cell into an ordered list of trimmed strings.
///
/// A cell with no comma yields a single-element list, never a bare scalar,
/// so downstream consumers always see a uniform shape. A blank cell yields
/// an empty list.
pub fn parse_list(raw: &CellValue) -> Vec<String> {
    let text = raw.display_text();
    if text.is_empty() {
        return Vec::new();
    }

    if text.contains(',') {
        text.split(',').map(|s| s.trim().to_string()).collect()
    } else {
        vec![text]
    }
}

/// Parse a vocabulary-controlled keyword cell.
///
/// Every comma-split token becomes one keyword entry tagged with the
/// column's fixed keyword type.
pub fn parse_vocab_keywords(raw: &CellValue, keyword_type: &str) -> Vec<KeywordEntry> {
    parse_list(raw)
        .into_iter()
        .map(|keyword| KeywordEntry::new(keyword_type, keyword))
        .collect()
}

/// Parse a free-text descriptive keyword cell.
///
/// The cell content is a pipe-separated keyed block over `keywordType` and
/// `keyword`; the type defaults to `theme` when the block leaves it out. A
/// blank cell contributes no entries.
pub fn parse_descriptive_keywords(raw: &CellValue, field: &str) -> Result<Vec<KeywordEntry>> {
    let Some(block) = parse_keyed_block(raw, field, DESCRIPTIVE_KEYWORD_KEYS, false)? else {
        return Ok(Vec::new());
    };

    let keyword_type = block
        .get("keywordType")
        .cloned()
        .unwrap_or_else(|| KEYWORD_TYPE_THEME.to_string());
    let keyword = block.get("keyword").cloned().unwrap_or_default();

    if keyword.is_empty() {
        return Err(Error::field_parse(
            field,
            "descriptive keyword block has no keyword value",
        ));
    }

    Ok(vec![KeywordEntry::new(keyword_type, keyword)])
}
