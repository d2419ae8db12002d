//! Tests for bounding box extraction

use super::text;
use crate::Error;
use crate::app::models::CellValue;
use crate::app::services::field_parsers::bounding_box::parse_bounding_box;

#[test]
fn test_four_bounds_extracted() {
    let cell = text(
        "northBoundLatitude:10|southBoundLatitude:-5|eastBoundLongitude:30|westBoundLongitude:20",
    );

    let bbox = parse_bounding_box(&cell, "boundingBox").unwrap();
    assert_eq!(bbox.north, 10.0);
    assert_eq!(bbox.south, -5.0);
    assert_eq!(bbox.east, 30.0);
    assert_eq!(bbox.west, 20.0);
}

#[test]
fn test_decimal_bounds() {
    let cell = text(
        "northBoundLatitude:-29.75|southBoundLatitude:-35.5|eastBoundLongitude:32.25|westBoundLongitude:16.5",
    );

    let bbox = parse_bounding_box(&cell, "boundingBox").unwrap();
    assert_eq!(bbox.north, -29.75);
    assert_eq!(bbox.west, 16.5);
}

#[test]
fn test_malformed_value_names_the_bound() {
    let cell = text(
        "northBoundLatitude:abc|southBoundLatitude:-5|eastBoundLongitude:30|westBoundLongitude:20",
    );

    let err = parse_bounding_box(&cell, "boundingBox").unwrap_err();
    match err {
        Error::FieldParse { field, message } => {
            assert_eq!(field, "boundingBox");
            assert!(message.contains("abc"));
            assert!(message.contains("northBoundLatitude"));
        }
        other => panic!("Expected FieldParse error, got {:?}", other),
    }
}

#[test]
fn test_missing_bound_is_an_error() {
    let cell = text("northBoundLatitude:10|southBoundLatitude:-5|eastBoundLongitude:30");

    let err = parse_bounding_box(&cell, "boundingBox").unwrap_err();
    match err {
        Error::FieldParse { message, .. } => {
            assert!(message.contains("westBoundLongitude"));
        }
        other => panic!("Expected FieldParse error, got {:?}", other),
    }
}

#[test]
fn test_unknown_key_is_an_error() {
    let cell = text(
        "north:10|southBoundLatitude:-5|eastBoundLongitude:30|westBoundLongitude:20",
    );
    assert!(parse_bounding_box(&cell, "boundingBox").is_err());
}

#[test]
fn test_blank_cell_is_an_error() {
    assert!(parse_bounding_box(&CellValue::Empty, "boundingBox").is_err());
}
