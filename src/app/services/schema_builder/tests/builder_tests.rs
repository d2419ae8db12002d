//! Tests for the fail-fast document builder

use super::at_midnight;
use crate::Error;
use crate::app::models::BoundingBox;
use crate::app::services::schema_builder::builder::MetadataDocumentBuilder;
use crate::app::services::schema_builder::document::PolygonPoint;

fn minimal_builder() -> MetadataDocumentBuilder {
    let mut builder = MetadataDocumentBuilder::new("+02:00");
    builder.set_file_identifier("41007").unwrap();
    builder.set_title("Test record");
    builder.set_date(at_midnight(2019, 11, 2));
    builder
        .set_bounding_box_extent(BoundingBox {
            north: 10.0,
            south: -5.0,
            east: 30.0,
            west: 20.0,
        })
        .unwrap();
    builder
}

#[test]
fn test_date_rendering() {
    let document = minimal_builder().finish().unwrap();
    assert_eq!(document.date, "2019-11-02");
}

#[test]
fn test_topic_categories_reject_empty_list() {
    let mut builder = minimal_builder();

    let err = builder.set_topic_categories(Vec::new()).unwrap_err();
    assert!(matches!(err, Error::SchemaShape { .. }));

    builder
        .set_topic_categories(vec!["oceanography".to_string(), "climate".to_string()])
        .unwrap();
    let document = builder.finish().unwrap();
    assert_eq!(document.topic_categories, vec!["oceanography", "climate"]);
}

#[test]
fn test_status_rejects_empty_list() {
    let mut builder = minimal_builder();
    assert!(builder.set_status(Vec::new()).is_err());
    assert!(builder.set_status(vec!["completed".to_string()]).is_ok());
}

#[test]
fn test_spatial_representation_types_reject_empty_list() {
    let mut builder = minimal_builder();
    assert!(builder.set_spatial_representation_types(Vec::new()).is_err());
}

#[test]
fn test_bounding_polygon_requires_closed_ring() {
    let mut builder = minimal_builder();
    let point = PolygonPoint {
        longitude: 20.0,
        latitude: -30.0,
    };

    let err = builder.add_bounding_polygon(vec![point; 4]).unwrap_err();
    assert!(matches!(err, Error::SchemaShape { .. }));

    builder.add_bounding_polygon(vec![point; 5]).unwrap();
    let document = builder.finish().unwrap();
    assert_eq!(
        document.extent.geographic_elements[0].bounding_polygon.len(),
        1
    );
}

#[test]
fn test_vertical_extent_ordering() {
    let mut builder = minimal_builder();
    assert!(builder.set_vertical_extent(100.0, 10.0, "m", "MSL").is_err());
    assert!(builder.set_vertical_extent(0.0, 120.0, "m", "MSL").is_ok());
}

#[test]
fn test_temporal_extent_rendering_with_offset() {
    let mut builder = minimal_builder();
    builder
        .set_temporal_extent(at_midnight(2015, 3, 12), at_midnight(2016, 6, 30))
        .unwrap();

    let document = builder.finish().unwrap();
    assert_eq!(
        document.extent.temporal_element.start_time.as_deref(),
        Some("2015-03-12T00:00:00+02:00")
    );
    assert_eq!(
        document.extent.temporal_element.end_time.as_deref(),
        Some("2016-06-30T00:00:00+02:00")
    );
}

#[test]
fn test_temporal_extent_rejects_inverted_range() {
    let mut builder = minimal_builder();
    assert!(
        builder
            .set_temporal_extent(at_midnight(2016, 6, 30), at_midnight(2015, 3, 12))
            .is_err()
    );
}

#[test]
fn test_custom_offset_applies_to_all_timestamps() {
    let mut builder = MetadataDocumentBuilder::new("+00:00");
    builder.set_file_identifier("1").unwrap();
    builder.set_title("t");
    builder.set_date(at_midnight(2019, 1, 1));
    builder
        .set_bounding_box_extent(BoundingBox {
            north: 1.0,
            south: 0.0,
            east: 1.0,
            west: 0.0,
        })
        .unwrap();
    builder.set_metadata_timestamp(at_midnight(2019, 12, 5));

    let document = builder.finish().unwrap();
    assert_eq!(
        document.metadata_timestamp.as_deref(),
        Some("2019-12-05T00:00:00+00:00")
    );
}

#[test]
fn test_invalid_bounding_box_rejected() {
    let mut builder = minimal_builder();

    let inverted = BoundingBox {
        north: -5.0,
        south: 10.0,
        east: 30.0,
        west: 20.0,
    };
    assert!(builder.set_bounding_box_extent(inverted).is_err());
}

#[test]
fn test_empty_file_identifier_rejected() {
    let mut builder = MetadataDocumentBuilder::new("+02:00");
    assert!(builder.set_file_identifier("  ").is_err());
}

#[test]
fn test_finish_requires_core_fields() {
    // Missing bounding box
    let mut builder = MetadataDocumentBuilder::new("+02:00");
    builder.set_file_identifier("41007").unwrap();
    builder.set_title("Test record");
    builder.set_date(at_midnight(2019, 11, 2));
    assert!(builder.finish().is_err());

    // Missing title
    let mut builder = MetadataDocumentBuilder::new("+02:00");
    builder.set_file_identifier("41007").unwrap();
    builder.set_date(at_midnight(2019, 11, 2));
    assert!(builder.finish().is_err());
}

#[test]
fn test_list_setters_append_scalar_setters_overwrite() {
    let mut builder = minimal_builder();

    builder.add_distribution_format("NetCDF", None);
    builder.add_distribution_format("CSV", None);
    builder.add_descriptive_keyword("theme", "upwelling");
    builder.add_descriptive_keyword("place", "Agulhas Bank");

    builder.set_scope("dataset");
    builder.set_scope("series");

    let document = builder.finish().unwrap();
    assert_eq!(document.distribution_formats.len(), 2);
    assert_eq!(document.descriptive_keywords.len(), 2);
    assert_eq!(document.scope, "series");
}

#[test]
fn test_languages_wrap_single_value() {
    let mut builder = minimal_builder();
    builder.set_languages("English");

    let document = builder.finish().unwrap();
    assert_eq!(document.languages, vec!["English"]);
}
