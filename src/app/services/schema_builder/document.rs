//! Catalog metadata document model
//!
//! The nested structure published to the catalog API. Field names follow the
//! catalog's camel-case wire format via serde renames; the structure is
//! JSON-serializable as one document per record.

use serde::{Deserialize, Serialize};

/// A finished catalog metadata document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDocument {
    pub file_identifier: String,
    pub title: String,
    pub date: String,
    pub responsible_parties: Vec<ResponsibleParty>,
    pub extent: Extent,
    pub languages: Vec<String>,
    pub character_set: String,
    pub topic_categories: Vec<String>,
    pub spatial_resolution: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub distribution_formats: Vec<DistributionFormat>,
    pub spatial_representation_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_system_name: Option<ReferenceSystemName>,
    pub lineage_statement: String,
    pub online_resources: Vec<OnlineResourceEntry>,
    pub metadata_standard_name: String,
    pub metadata_standard_version: String,
    pub metadata_language: String,
    pub metadata_character_set: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_timestamp: Option<String>,
    pub purpose: String,
    pub scope: String,
    pub status: Vec<String>,
    pub descriptive_keywords: Vec<DescriptiveKeyword>,
    pub constraints: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_identifiers: Vec<RelatedIdentifierEntry>,
}

/// One responsible-party entry of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibleParty {
    pub individual_name: String,
    pub organization_name: String,
    pub contact_info: String,
    pub position_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_resource: Option<OnlineResourceRef>,
}

/// A bare linkage reference attached to a responsible party
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineResourceRef {
    pub linkage: String,
}

/// Combined geographic, vertical, and temporal extent of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    pub geographic_elements: Vec<GeographicElement>,
    pub vertical_element: VerticalExtent,
    pub temporal_element: TemporalExtent,
}

/// One geographic element of the extent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographic_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBoxExtent>,
    pub bounding_polygon: Vec<Vec<PolygonPoint>>,
}

/// Four-bound geographic extent in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBoxExtent {
    pub west_bound_longitude: f64,
    pub east_bound_longitude: f64,
    pub south_bound_latitude: f64,
    pub north_bound_latitude: f64,
}

/// One vertex of a bounding polygon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// Vertical extent; serializes as an empty mapping when unset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalExtent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_datum: Option<String>,
}

/// Temporal extent; serializes as an empty mapping when unset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalExtent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// One distribution format entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionFormat {
    pub format_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,
}

/// Spatial reference system name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSystemName {
    pub code_space: String,
    pub version: String,
}

/// One online resource entry of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineResourceEntry {
    pub name: String,
    pub description: String,
    pub linkage: String,
}

/// One descriptive keyword entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveKeyword {
    pub keyword_type: String,
    pub keyword: String,
}

/// One constraints entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    pub rights: String,
    #[serde(rename = "rightsURI")]
    pub rights_uri: String,
    pub use_limitations: Vec<String>,
    pub access_constraints: Vec<String>,
    pub use_constraints: Vec<String>,
    pub classification: String,
}

/// One related-identifier entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedIdentifierEntry {
    pub related_identifier: String,
    pub related_identifier_type: String,
    pub relation_type: String,
}
