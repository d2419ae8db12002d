//! Document assembly from a normalized record
//!
//! Drives the builder through every field of one normalized record. Any
//! shape error surfaces immediately and drops the record; the batch driver
//! continues with the next one.

use crate::app::models::NormalizedRecord;
use crate::constants::{DOCUMENT_CHARACTER_SET, DOCUMENT_METADATA_LANGUAGE};
use crate::Result;
use tracing::warn;

use super::builder::MetadataDocumentBuilder;
use super::document::MetadataDocument;

/// Assemble one catalog document from a normalized record.
///
/// `timestamp_offset` is the fixed offset suffix appended to rendered
/// date-time values.
pub fn assemble_document(
    record: &NormalizedRecord,
    timestamp_offset: &str,
) -> Result<MetadataDocument> {
    let mut builder = MetadataDocumentBuilder::new(timestamp_offset);

    builder.set_file_identifier(&record.file_identifier)?;
    builder.set_title(&record.title);
    builder.set_date(record.publication_date);

    for contact in &record.responsible_parties {
        // The catalog carries no separate email field; a non-empty email is
        // folded into the contact info as its final comma-delimited piece.
        let contact_info = match (contact.contact_info.is_empty(), contact.email.is_empty()) {
            (false, false) => format!("{},{}", contact.contact_info, contact.email),
            (true, false) => contact.email.clone(),
            _ => contact.contact_info.clone(),
        };

        builder.add_responsible_party(
            &contact.individual_name,
            &contact.organization_name,
            contact_info,
            &contact.role,
            &contact.position_name,
            None,
        );
    }

    builder.set_geographic_identifier(&record.geographic_identifier);
    builder.set_bounding_box_extent(record.bounding_box)?;

    match (record.start_time, record.end_time) {
        (Some(start), Some(end)) => builder.set_temporal_extent(start, end)?,
        _ => warn!(
            "Record id {}: temporal extent omitted, start or end time unavailable",
            record.file_identifier
        ),
    }

    builder.set_languages(&record.language);
    builder.set_character_set(DOCUMENT_CHARACTER_SET);
    builder.set_topic_categories(record.topic_categories.clone())?;
    builder.set_spatial_resolution(&record.spatial_resolution);
    builder.set_abstract(&record.abstract_text);
    builder.add_distribution_format(&record.format_name, None);
    builder.set_spatial_representation_types(vec![record.spatial_representation_type.clone()])?;

    if let Some(reference_system) = &record.reference_system {
        builder.set_reference_system_name(&reference_system.code_space, &reference_system.version);
    }

    builder.set_lineage_statement(&record.lineage_statement);

    if let Some(resource) = &record.online_resource {
        builder.add_online_resource(&resource.name, &resource.description, &resource.linkage);
    }

    builder.set_metadata_standard_name(&record.metadata_standard_name);
    builder.set_metadata_standard_version(&record.metadata_standard_version);
    builder.set_metadata_language(DOCUMENT_METADATA_LANGUAGE);
    builder.set_metadata_character_set(DOCUMENT_CHARACTER_SET);

    match record.metadata_timestamp {
        Some(timestamp) => builder.set_metadata_timestamp(timestamp),
        None => warn!(
            "Record id {}: metadata timestamp unavailable, field omitted",
            record.file_identifier
        ),
    }

    builder.set_purpose("");
    builder.set_scope(&record.scope);
    builder.set_status(vec![record.status.clone()])?;

    for entry in &record.descriptive_keywords {
        builder.add_descriptive_keyword(entry.keyword_type.replace(' ', ""), &entry.keyword);
    }

    builder.set_constraints(
        &record.rights,
        &record.rights_uri,
        &record.access_constraints,
        Vec::new(),
        "",
        "",
    );

    if let Some(related) = &record.related_identifier {
        builder.set_related_identifiers(
            &related.related_identifier,
            &related.related_identifier_type,
            &related.relation_type,
        );
    }

    builder.finish()
}
