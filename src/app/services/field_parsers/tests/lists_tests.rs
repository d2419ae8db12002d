//! Tests for list and keyword parsing

use super::text;
use crate::app::models::CellValue;
use crate::app::services::field_parsers::lists::{
    parse_descriptive_keywords, parse_list, parse_vocab_keywords,
};
use crate::constants::{KEYWORD_TYPE_PLACE, KEYWORD_TYPE_STRATUM};

#[test]
fn test_comma_split_list() {
    assert_eq!(parse_list(&text("a,b,c")), vec!["a", "b", "c"]);
}

#[test]
fn test_single_value_still_yields_a_list() {
    assert_eq!(parse_list(&text("a")), vec!["a"]);
}

#[test]
fn test_tokens_are_trimmed() {
    assert_eq!(
        parse_list(&text("oceanography , climatologyMeteorologyAtmosphere")),
        vec!["oceanography", "climatologyMeteorologyAtmosphere"]
    );
}

#[test]
fn test_blank_cell_yields_empty_list() {
    assert!(parse_list(&CellValue::Empty).is_empty());
    assert!(parse_list(&text("   ")).is_empty());
}

#[test]
fn test_vocab_keywords_tagged_with_column_type() {
    let entries = parse_vocab_keywords(&text("Agulhas Bank, Benguela"), KEYWORD_TYPE_PLACE);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].keyword_type, "place");
    assert_eq!(entries[0].keyword, "Agulhas Bank");
    assert_eq!(entries[1].keyword, "Benguela");
}

#[test]
fn test_vocab_keywords_single_token() {
    let entries = parse_vocab_keywords(&text("CTD"), KEYWORD_TYPE_STRATUM);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].keyword_type, "stratum");
    assert_eq!(entries[0].keyword, "CTD");
}

#[test]
fn test_vocab_keywords_blank_cell_contributes_nothing() {
    assert!(parse_vocab_keywords(&CellValue::Empty, KEYWORD_TYPE_PLACE).is_empty());
}

#[test]
fn test_descriptive_keywords_block() {
    let entries =
        parse_descriptive_keywords(&text("keywordType:theme|keyword:upwelling"), "descriptiveKeywords")
            .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].keyword_type, "theme");
    assert_eq!(entries[0].keyword, "upwelling");
}

#[test]
fn test_descriptive_keywords_type_defaults_to_theme() {
    let entries =
        parse_descriptive_keywords(&text("keyword:sea surface temperature"), "descriptiveKeywords")
            .unwrap();

    assert_eq!(entries[0].keyword_type, "theme");
    assert_eq!(entries[0].keyword, "sea surface temperature");
}

#[test]
fn test_descriptive_keywords_unknown_key_fails() {
    let result = parse_descriptive_keywords(&text("vocabulary:GCMD"), "descriptiveKeywords");
    assert!(result.is_err());
}

#[test]
fn test_descriptive_keywords_blank_cell_contributes_nothing() {
    let entries = parse_descriptive_keywords(&CellValue::Empty, "descriptiveKeywords").unwrap();
    assert!(entries.is_empty());
}
