//! Fail-fast document builder
//!
//! One builder per output document. Every setter validates its argument
//! before storing and returns a shape error otherwise; list setters append,
//! scalar setters overwrite. Finishing consumes the builder and checks the
//! required substructure, so no consumer ever observes a half-built or
//! still-mutable document.

use crate::app::models::BoundingBox;
use crate::constants::{DOCUMENT_DATE_FORMAT, DOCUMENT_DATETIME_FORMAT};
use crate::{Error, Result};
use chrono::NaiveDateTime;

use super::document::{
    BoundingBoxExtent, Constraint, DescriptiveKeyword, DistributionFormat, Extent,
    GeographicElement, MetadataDocument, OnlineResourceEntry, OnlineResourceRef, PolygonPoint,
    ReferenceSystemName, RelatedIdentifierEntry, ResponsibleParty, TemporalExtent, VerticalExtent,
};

/// Minimum number of vertices of a bounding polygon (a closed ring)
const MIN_POLYGON_POINTS: usize = 5;

/// Builder for one catalog metadata document
#[derive(Debug, Clone)]
pub struct MetadataDocumentBuilder {
    timestamp_offset: String,
    file_identifier: Option<String>,
    title: Option<String>,
    date: Option<String>,
    responsible_parties: Vec<ResponsibleParty>,
    geographic_identifier: Option<String>,
    bounding_box: Option<BoundingBoxExtent>,
    bounding_polygons: Vec<Vec<PolygonPoint>>,
    vertical_extent: VerticalExtent,
    temporal_extent: TemporalExtent,
    languages: Vec<String>,
    character_set: String,
    topic_categories: Vec<String>,
    spatial_resolution: String,
    abstract_text: String,
    distribution_formats: Vec<DistributionFormat>,
    spatial_representation_types: Vec<String>,
    reference_system_name: Option<ReferenceSystemName>,
    lineage_statement: String,
    online_resources: Vec<OnlineResourceEntry>,
    metadata_standard_name: String,
    metadata_standard_version: String,
    metadata_language: String,
    metadata_character_set: String,
    metadata_timestamp: Option<String>,
    purpose: String,
    scope: String,
    status: Vec<String>,
    descriptive_keywords: Vec<DescriptiveKeyword>,
    constraints: Vec<Constraint>,
    related_identifiers: Vec<RelatedIdentifierEntry>,
}

impl MetadataDocumentBuilder {
    /// Create a builder rendering timestamps with the given fixed offset
    /// suffix (for example `+02:00`)
    pub fn new(timestamp_offset: impl Into<String>) -> Self {
        Self {
            timestamp_offset: timestamp_offset.into(),
            file_identifier: None,
            title: None,
            date: None,
            responsible_parties: Vec::new(),
            geographic_identifier: None,
            bounding_box: None,
            bounding_polygons: Vec::new(),
            vertical_extent: VerticalExtent::default(),
            temporal_extent: TemporalExtent::default(),
            languages: Vec::new(),
            character_set: String::new(),
            topic_categories: Vec::new(),
            spatial_resolution: String::new(),
            abstract_text: String::new(),
            distribution_formats: Vec::new(),
            spatial_representation_types: Vec::new(),
            reference_system_name: None,
            lineage_statement: String::new(),
            online_resources: Vec::new(),
            metadata_standard_name: String::new(),
            metadata_standard_version: String::new(),
            metadata_language: String::new(),
            metadata_character_set: String::new(),
            metadata_timestamp: None,
            purpose: String::new(),
            scope: String::new(),
            status: Vec::new(),
            descriptive_keywords: Vec::new(),
            constraints: Vec::new(),
            related_identifiers: Vec::new(),
        }
    }

    pub fn set_file_identifier(&mut self, file_identifier: impl Into<String>) -> Result<()> {
        let file_identifier = file_identifier.into();
        if file_identifier.trim().is_empty() {
            return Err(Error::schema_shape("File identifier cannot be empty"));
        }
        self.file_identifier = Some(file_identifier);
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the publication date, rendered as year-month-day
    pub fn set_date(&mut self, date: NaiveDateTime) {
        self.date = Some(date.format(DOCUMENT_DATE_FORMAT).to_string());
    }

    /// Append one responsible party
    pub fn add_responsible_party(
        &mut self,
        individual_name: impl Into<String>,
        organization_name: impl Into<String>,
        contact_info: impl Into<String>,
        role: impl Into<String>,
        position_name: impl Into<String>,
        online_resource: Option<String>,
    ) {
        self.responsible_parties.push(ResponsibleParty {
            individual_name: individual_name.into(),
            organization_name: organization_name.into(),
            contact_info: contact_info.into(),
            position_name: position_name.into(),
            role: role.into(),
            online_resource: online_resource.map(|linkage| OnlineResourceRef { linkage }),
        });
    }

    pub fn set_geographic_identifier(&mut self, identifier: impl Into<String>) {
        self.geographic_identifier = Some(identifier.into());
    }

    /// Set the geographic bounding box extent after validating its bounds
    pub fn set_bounding_box_extent(&mut self, bounding_box: BoundingBox) -> Result<()> {
        bounding_box.validate()?;
        self.bounding_box = Some(BoundingBoxExtent {
            west_bound_longitude: bounding_box.west,
            east_bound_longitude: bounding_box.east,
            south_bound_latitude: bounding_box.south,
            north_bound_latitude: bounding_box.north,
        });
        Ok(())
    }

    /// Append a bounding polygon; a closed ring needs at least five vertices
    pub fn add_bounding_polygon(&mut self, polygon: Vec<PolygonPoint>) -> Result<()> {
        if polygon.len() < MIN_POLYGON_POINTS {
            return Err(Error::schema_shape(format!(
                "Invalid bounding polygon: {} points given, at least {} required",
                polygon.len(),
                MIN_POLYGON_POINTS
            )));
        }
        self.bounding_polygons.push(polygon);
        Ok(())
    }

    pub fn set_vertical_extent(
        &mut self,
        minimum_value: f64,
        maximum_value: f64,
        unit_of_measure: impl Into<String>,
        vertical_datum: impl Into<String>,
    ) -> Result<()> {
        if minimum_value > maximum_value {
            return Err(Error::schema_shape(format!(
                "Invalid vertical extent: minimum {} exceeds maximum {}",
                minimum_value, maximum_value
            )));
        }
        self.vertical_extent = VerticalExtent {
            minimum_value: Some(minimum_value),
            maximum_value: Some(maximum_value),
            unit_of_measure: Some(unit_of_measure.into()),
            vertical_datum: Some(vertical_datum.into()),
        };
        Ok(())
    }

    /// Set the temporal extent, rendered with the fixed offset suffix
    pub fn set_temporal_extent(
        &mut self,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<()> {
        if start_time > end_time {
            return Err(Error::schema_shape(format!(
                "Invalid temporal extent: start {} is after end {}",
                start_time, end_time
            )));
        }
        self.temporal_extent = TemporalExtent {
            start_time: Some(self.render_datetime(start_time)),
            end_time: Some(self.render_datetime(end_time)),
        };
        Ok(())
    }

    /// Set the dataset language, stored as a single-element list
    pub fn set_languages(&mut self, language: impl Into<String>) {
        self.languages = vec![language.into()];
    }

    pub fn set_character_set(&mut self, character_set: impl Into<String>) {
        self.character_set = character_set.into();
    }

    /// Set the topic categories; the list must not be empty
    pub fn set_topic_categories(&mut self, categories: Vec<String>) -> Result<()> {
        if categories.is_empty() {
            return Err(Error::schema_shape(
                "Topic categories must be a non-empty list",
            ));
        }
        self.topic_categories = categories;
        Ok(())
    }

    pub fn set_spatial_resolution(&mut self, resolution: impl Into<String>) {
        self.spatial_resolution = resolution.into();
    }

    pub fn set_abstract(&mut self, abstract_text: impl Into<String>) {
        self.abstract_text = abstract_text.into();
    }

    /// Append one distribution format
    pub fn add_distribution_format(
        &mut self,
        format_name: impl Into<String>,
        format_version: Option<String>,
    ) {
        self.distribution_formats.push(DistributionFormat {
            format_name: format_name.into(),
            format_version,
        });
    }

    /// Set the spatial representation types; the list must not be empty
    pub fn set_spatial_representation_types(&mut self, types: Vec<String>) -> Result<()> {
        if types.is_empty() {
            return Err(Error::schema_shape(
                "Spatial representation types must be a non-empty list",
            ));
        }
        self.spatial_representation_types = types;
        Ok(())
    }

    pub fn set_reference_system_name(
        &mut self,
        code_space: impl Into<String>,
        version: impl Into<String>,
    ) {
        self.reference_system_name = Some(ReferenceSystemName {
            code_space: code_space.into(),
            version: version.into(),
        });
    }

    pub fn set_lineage_statement(&mut self, lineage: impl Into<String>) {
        self.lineage_statement = lineage.into();
    }

    /// Append one online resource
    pub fn add_online_resource(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        linkage: impl Into<String>,
    ) {
        self.online_resources.push(OnlineResourceEntry {
            name: name.into(),
            description: description.into(),
            linkage: linkage.into(),
        });
    }

    pub fn set_metadata_standard_name(&mut self, name: impl Into<String>) {
        self.metadata_standard_name = name.into();
    }

    pub fn set_metadata_standard_version(&mut self, version: impl Into<String>) {
        self.metadata_standard_version = version.into();
    }

    pub fn set_metadata_language(&mut self, language: impl Into<String>) {
        self.metadata_language = language.into();
    }

    pub fn set_metadata_character_set(&mut self, character_set: impl Into<String>) {
        self.metadata_character_set = character_set.into();
    }

    /// Set the metadata timestamp, rendered with the fixed offset suffix
    pub fn set_metadata_timestamp(&mut self, timestamp: NaiveDateTime) {
        self.metadata_timestamp = Some(self.render_datetime(timestamp));
    }

    pub fn set_purpose(&mut self, purpose: impl Into<String>) {
        self.purpose = purpose.into();
    }

    pub fn set_scope(&mut self, scope: impl Into<String>) {
        self.scope = scope.into();
    }

    /// Set the status values; the list must not be empty
    pub fn set_status(&mut self, status: Vec<String>) -> Result<()> {
        if status.is_empty() {
            return Err(Error::schema_shape("Status must be a non-empty list"));
        }
        self.status = status;
        Ok(())
    }

    /// Append one descriptive keyword
    pub fn add_descriptive_keyword(
        &mut self,
        keyword_type: impl Into<String>,
        keyword: impl Into<String>,
    ) {
        self.descriptive_keywords.push(DescriptiveKeyword {
            keyword_type: keyword_type.into(),
            keyword: keyword.into(),
        });
    }

    /// Set the constraints entry
    pub fn set_constraints(
        &mut self,
        rights: impl Into<String>,
        rights_uri: impl Into<String>,
        access_constraints: impl Into<String>,
        use_constraints: Vec<String>,
        classification: impl Into<String>,
        use_limitations: impl Into<String>,
    ) {
        self.constraints = vec![Constraint {
            rights: rights.into(),
            rights_uri: rights_uri.into(),
            use_limitations: vec![use_limitations.into()],
            access_constraints: vec![access_constraints.into()],
            use_constraints,
            classification: classification.into(),
        }];
    }

    /// Set the related-identifier entry
    pub fn set_related_identifiers(
        &mut self,
        related_identifier: impl Into<String>,
        related_identifier_type: impl Into<String>,
        relation_type: impl Into<String>,
    ) {
        self.related_identifiers = vec![RelatedIdentifierEntry {
            related_identifier: related_identifier.into(),
            related_identifier_type: related_identifier_type.into(),
            relation_type: relation_type.into(),
        }];
    }

    /// Finish the document, verifying the required substructure.
    ///
    /// Consumes the builder; the returned document cannot be mutated through
    /// it afterwards.
    pub fn finish(self) -> Result<MetadataDocument> {
        let file_identifier = self
            .file_identifier
            .ok_or_else(|| Error::schema_shape("Document is missing its file identifier"))?;
        let title = self
            .title
            .ok_or_else(|| Error::schema_shape("Document is missing its title"))?;
        let date = self
            .date
            .ok_or_else(|| Error::schema_shape("Document is missing its publication date"))?;

        if self.bounding_box.is_none() {
            return Err(Error::schema_shape(
                "Document is missing its geographic bounding box",
            ));
        }

        Ok(MetadataDocument {
            file_identifier,
            title,
            date,
            responsible_parties: self.responsible_parties,
            extent: Extent {
                geographic_elements: vec![GeographicElement {
                    geographic_identifier: self.geographic_identifier,
                    bounding_box: self.bounding_box,
                    bounding_polygon: self.bounding_polygons,
                }],
                vertical_element: self.vertical_extent,
                temporal_element: self.temporal_extent,
            },
            languages: self.languages,
            character_set: self.character_set,
            topic_categories: self.topic_categories,
            spatial_resolution: self.spatial_resolution,
            abstract_text: self.abstract_text,
            distribution_formats: self.distribution_formats,
            spatial_representation_types: self.spatial_representation_types,
            reference_system_name: self.reference_system_name,
            lineage_statement: self.lineage_statement,
            online_resources: self.online_resources,
            metadata_standard_name: self.metadata_standard_name,
            metadata_standard_version: self.metadata_standard_version,
            metadata_language: self.metadata_language,
            metadata_character_set: self.metadata_character_set,
            metadata_timestamp: self.metadata_timestamp,
            purpose: self.purpose,
            scope: self.scope,
            status: self.status,
            descriptive_keywords: self.descriptive_keywords,
            constraints: self.constraints,
            related_identifiers: self.related_identifiers,
        })
    }

    fn render_datetime(&self, value: NaiveDateTime) -> String {
        format!(
            "{}{}",
            value.format(DOCUMENT_DATETIME_FORMAT),
            self.timestamp_offset
        )
    }
}
