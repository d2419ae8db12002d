//! Tests for document serialization

use super::sample_record;
use crate::app::services::schema_builder::assemble::assemble_document;
use crate::app::services::schema_builder::document::MetadataDocument;

#[test]
fn test_wire_format_field_names() {
    let document = assemble_document(&sample_record(), "+02:00").unwrap();
    let json = serde_json::to_value(&document).unwrap();

    // Top-level camel-case names expected by the catalog
    for key in [
        "fileIdentifier",
        "title",
        "date",
        "responsibleParties",
        "extent",
        "languages",
        "characterSet",
        "topicCategories",
        "spatialResolution",
        "abstract",
        "distributionFormats",
        "spatialRepresentationTypes",
        "referenceSystemName",
        "lineageStatement",
        "onlineResources",
        "metadataStandardName",
        "metadataStandardVersion",
        "metadataLanguage",
        "metadataCharacterSet",
        "metadataTimestamp",
        "purpose",
        "scope",
        "status",
        "descriptiveKeywords",
        "constraints",
        "relatedIdentifiers",
    ] {
        assert!(json.get(key).is_some(), "missing document key '{}'", key);
    }
}

#[test]
fn test_nested_extent_wire_format() {
    let document = assemble_document(&sample_record(), "+02:00").unwrap();
    let json = serde_json::to_value(&document).unwrap();

    let extent = &json["extent"];
    assert!(extent.get("geographicElements").is_some());
    assert!(extent.get("verticalElement").is_some());
    assert!(extent.get("temporalElement").is_some());

    let bbox = &extent["geographicElements"][0]["boundingBox"];
    assert_eq!(bbox["northBoundLatitude"], -29.75);
    assert_eq!(bbox["southBoundLatitude"], -35.5);
    assert_eq!(bbox["eastBoundLongitude"], 32.25);
    assert_eq!(bbox["westBoundLongitude"], 16.5);
}

#[test]
fn test_unset_vertical_extent_serializes_as_empty_mapping() {
    let document = assemble_document(&sample_record(), "+02:00").unwrap();
    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(json["extent"]["verticalElement"], serde_json::json!({}));
}

#[test]
fn test_unset_temporal_extent_serializes_as_empty_mapping() {
    let mut record = sample_record();
    record.start_time = None;
    record.end_time = None;

    let document = assemble_document(&record, "+02:00").unwrap();
    let json = serde_json::to_value(&document).unwrap();

    assert_eq!(json["extent"]["temporalElement"], serde_json::json!({}));
}

#[test]
fn test_constraints_rights_uri_spelling() {
    let document = assemble_document(&sample_record(), "+02:00").unwrap();
    let json = serde_json::to_value(&document).unwrap();

    assert!(json["constraints"][0].get("rightsURI").is_some());
    assert!(json["constraints"][0].get("useLimitations").is_some());
    assert!(json["constraints"][0].get("accessConstraints").is_some());
}

#[test]
fn test_document_round_trips_through_json() {
    let document = assemble_document(&sample_record(), "+02:00").unwrap();

    let json = serde_json::to_string(&document).unwrap();
    let restored: MetadataDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(document, restored);
}
