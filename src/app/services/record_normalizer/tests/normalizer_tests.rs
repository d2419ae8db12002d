//! Tests for per-row normalization and failure isolation

use super::{row_from_pairs, valid_row};
use crate::Error;
use crate::app::models::CellValue;
use crate::app::services::record_normalizer::field_table::SchemaVersion;
use crate::app::services::record_normalizer::normalizer::RecordNormalizer;
use crate::app::services::record_normalizer::stats::ImportStats;
use crate::config::UnknownColumnPolicy;
use chrono::{Datelike, Timelike};

fn normalizer() -> RecordNormalizer {
    RecordNormalizer::new(SchemaVersion::Master2019, UnknownColumnPolicy::Warn)
}

#[test]
fn test_valid_row_normalizes_completely() {
    let record = normalizer().normalize_row(&valid_row(2)).unwrap();

    assert_eq!(record.file_identifier, "41007");
    assert_eq!(record.title, "Agulhas Bank CTD stations");
    assert_eq!(record.publication_date.year(), 2019);
    assert_eq!(record.publication_date.month(), 11);
    assert_eq!(record.topic_categories.len(), 2);
    assert_eq!(record.keywords, vec!["ctd", "temperature", "salinity"]);
    assert_eq!(record.bounding_box.north, -29.75);
    assert_eq!(record.spatial_representation_type, "textTable");
    assert_eq!(record.language, "English");
    assert_eq!(record.scope, "dataset");
    assert_eq!(record.status, "completed");

    let reference_system = record.reference_system.unwrap();
    assert_eq!(reference_system.code_space, "EPSG4326");
    assert_eq!(reference_system.version, "8.6");

    let related = record.related_identifier.unwrap();
    assert_eq!(related.related_identifier, "10.1234/abc");

    let resource = record.online_resource.unwrap();
    assert_eq!(resource.linkage, "https://example.org/data");

    assert!(record.start_time.is_some());
    assert_eq!(record.end_time.unwrap().hour(), 12);
    assert!(record.metadata_timestamp.is_some());
}

#[test]
fn test_contact_columns_append_in_declaration_order() {
    let record = normalizer().normalize_row(&valid_row(2)).unwrap();

    let names: Vec<&str> = record
        .responsible_parties
        .iter()
        .map(|c| c.individual_name.as_str())
        .collect();
    assert_eq!(names, vec!["Jane Mokoena", "P Ndlovu", ""]);

    assert_eq!(record.responsible_parties[0].role, "principalInvestigator");
    assert_eq!(record.responsible_parties[2].role, "publisher");
    assert_eq!(record.responsible_parties[2].organization_name, "SAEON");
}

#[test]
fn test_keyword_columns_accumulate() {
    let record = normalizer().normalize_row(&valid_row(2)).unwrap();

    // One free-text block entry, two place entries, one instrument entry
    assert_eq!(record.descriptive_keywords.len(), 4);
    assert_eq!(record.descriptive_keywords[0].keyword_type, "theme");
    assert_eq!(record.descriptive_keywords[1].keyword_type, "place");
    assert_eq!(record.descriptive_keywords[1].keyword, "Agulhas Bank");
    assert_eq!(record.descriptive_keywords[3].keyword_type, "stratum");
    assert_eq!(record.descriptive_keywords[3].keyword, "CTD");
}

#[test]
fn test_numeric_identifier_coerced_to_integer_string() {
    let mut row = valid_row(2);
    row.cells
        .insert("fileIdentifier".to_string(), CellValue::Number(41007.0));

    let record = normalizer().normalize_row(&row).unwrap();
    assert_eq!(record.file_identifier, "41007");
}

#[test]
fn test_row_without_identifier_is_skipped_with_diagnostic() {
    let mut row = valid_row(3);
    row.cells.remove("fileIdentifier");

    let mut stats = ImportStats::new();
    let records = normalizer().normalize_rows(std::slice::from_ref(&row), &mut stats, None);

    assert!(records.is_empty());
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.diagnostics.len(), 1);
    assert!(stats.diagnostics[0].contains("<missing>"));
    assert!(stats.diagnostics[0].contains("row 3"));
}

#[test]
fn test_critical_failure_does_not_affect_following_rows() {
    let mut bad_row = valid_row(2);
    bad_row.cells.insert(
        "boundingBox".to_string(),
        CellValue::Text("northBoundLatitude:abc".to_string()),
    );
    let good_row = valid_row(3);

    let mut stats = ImportStats::new();
    let records = normalizer().normalize_rows(&[bad_row, good_row], &mut stats, None);

    assert_eq!(records.len(), 1);
    assert_eq!(stats.rows_read, 2);
    assert_eq!(stats.normalized, 1);
    assert_eq!(stats.skipped, 1);
    assert!(stats.diagnostics[0].contains("boundingBox"));
    assert!(stats.diagnostics[0].contains("41007"));
}

#[test]
fn test_optional_field_failure_defaults_and_continues() {
    let mut row = valid_row(2);
    row.cells.insert(
        "startTime".to_string(),
        CellValue::Text("sometime in March".to_string()),
    );

    let record = normalizer().normalize_row(&row).unwrap();
    assert!(record.start_time.is_none());
    assert!(record.end_time.is_some());
}

#[test]
fn test_unrecognized_representation_type_skips_record() {
    let mut row = valid_row(2);
    row.cells.insert(
        "spatialRepresentationType".to_string(),
        CellValue::Text("hologram".to_string()),
    );

    let err = normalizer().normalize_row(&row).unwrap_err();
    match err {
        Error::FieldParse { field, message } => {
            assert_eq!(field, "spatialRepresentationType");
            assert!(message.contains("hologram"));
        }
        other => panic!("Expected FieldParse error, got {:?}", other),
    }
}

#[test]
fn test_blank_representation_type_is_allowed() {
    let mut row = valid_row(2);
    row.cells
        .insert("spatialRepresentationType".to_string(), CellValue::Empty);

    let record = normalizer().normalize_row(&row).unwrap();
    assert_eq!(record.spatial_representation_type, "");
}

#[test]
fn test_unknown_column_policy() {
    let mut row = valid_row(2);
    row.cells.insert(
        "Notes".to_string(),
        CellValue::Text("internal remark".to_string()),
    );

    // Warn policy lets the record through
    let lenient = RecordNormalizer::new(SchemaVersion::Master2019, UnknownColumnPolicy::Warn);
    assert!(lenient.normalize_row(&row).is_ok());

    // Reject policy fails it with a schema violation
    let strict = RecordNormalizer::new(SchemaVersion::Master2019, UnknownColumnPolicy::Reject);
    match strict.normalize_row(&row).unwrap_err() {
        Error::SchemaViolation { column } => assert_eq!(column, "Notes"),
        other => panic!("Expected SchemaViolation error, got {:?}", other),
    }
}

#[test]
fn test_blank_optional_cells_default_cleanly() {
    let mut row = valid_row(2);
    for column in ["lineageStatement", "spatialResolution", "formatName"] {
        row.cells.insert(column.to_string(), CellValue::Empty);
    }

    let record = normalizer().normalize_row(&row).unwrap();
    assert_eq!(record.lineage_statement, "");
    assert_eq!(record.spatial_resolution, "");
    assert_eq!(record.format_name, "");
}

#[test]
fn test_empty_reference_system_is_explicit_null() {
    let mut row = valid_row(2);
    row.cells
        .insert("referenceSystemName".to_string(), CellValue::Empty);

    let record = normalizer().normalize_row(&row).unwrap();
    assert!(record.reference_system.is_none());
}

#[test]
fn test_stats_summary_counts() {
    let mut stats = ImportStats::new();
    let rows = vec![valid_row(2), valid_row(3)];

    let records = normalizer().normalize_rows(&rows, &mut stats, None);
    stats.assembled = records.len();

    assert_eq!(stats.rows_read, 2);
    assert_eq!(stats.normalized, 2);
    assert!(stats.is_successful());
    assert!(stats.summary().contains("2 rows"));
}
