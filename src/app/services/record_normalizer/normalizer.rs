//! Per-row normalization orchestration
//!
//! Applies the schema version's field table to one raw row at a time,
//! accumulating parser output into a typed [`NormalizedRecord`]. A parser
//! failure on a critical field skips the record with a diagnostic; failures
//! on optional fields leave the field at its default. Rows are processed
//! strictly sequentially and one row's failure never affects the next.

use crate::app::models::{
    CellValue, NormalizedRecord, OnlineResource, ParsedValue, RawRow, ReferenceSystem,
    RelatedIdentifier,
};
use crate::app::services::field_parsers::{
    parse_bounding_box, parse_contact_list, parse_descriptive_keywords, parse_extent_date,
    parse_keyed_block, parse_list, parse_metadata_timestamp, parse_publication_date,
    parse_vocab_keywords,
};
use crate::config::{Config, UnknownColumnPolicy};
use crate::constants::IDENTIFIER_COLUMN;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use indicatif::ProgressBar;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

use super::field_table::{Criticality, FieldKind, FieldSpec, SchemaVersion};
use super::stats::ImportStats;

/// Record normalizer for MIMS master sheet rows
#[derive(Debug, Clone)]
pub struct RecordNormalizer {
    version: SchemaVersion,
    unknown_columns: UnknownColumnPolicy,
}

impl RecordNormalizer {
    /// Create a normalizer for a schema version and unknown-column policy
    pub fn new(version: SchemaVersion, unknown_columns: UnknownColumnPolicy) -> Self {
        Self {
            version,
            unknown_columns,
        }
    }

    /// Create a normalizer from the importer configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.schema_version, config.unknown_columns)
    }

    /// Get the schema version this normalizer applies
    pub fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    /// Normalize a batch of raw rows.
    ///
    /// Returns only the successfully normalized records; every skipped row
    /// leaves a diagnostic in `stats`.
    pub fn normalize_rows(
        &self,
        rows: &[RawRow],
        stats: &mut ImportStats,
        progress: Option<&ProgressBar>,
    ) -> Vec<NormalizedRecord> {
        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            stats.rows_read += 1;

            match self.normalize_row(row) {
                Ok(record) => {
                    stats.normalized += 1;
                    records.push(record);
                }
                Err(error) => {
                    let message = format!(
                        "Record id {} (row {}): {}",
                        identifier_hint(row),
                        row.index,
                        error
                    );
                    warn!("{}", message);
                    stats.record_skip(message);
                }
            }

            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        debug!(
            "Normalized {} of {} rows for schema version {}",
            records.len(),
            rows.len(),
            self.version
        );

        records
    }

    /// Normalize one raw row into a typed record
    pub fn normalize_row(&self, row: &RawRow) -> Result<NormalizedRecord> {
        self.audit_columns(row)?;

        let mut values: HashMap<&'static str, ParsedValue> = HashMap::new();

        for spec in self.version.field_table() {
            let cell = row.cell(spec.column);

            match parse_field(spec, cell) {
                Ok(Some(parsed)) => accumulate(&mut values, spec, parsed),
                Ok(None) => {}
                Err(error) => match spec.criticality {
                    Criticality::Optional => {
                        warn!(
                            "Field '{}' left at default for record id {}: {}",
                            spec.column,
                            identifier_hint(row),
                            error
                        );
                    }
                    Criticality::Critical => return Err(error),
                },
            }
        }

        build_record(values)
    }

    /// Verify that every observed column belongs to the known schema
    fn audit_columns(&self, row: &RawRow) -> Result<()> {
        let known = self.version.known_columns();

        for column in row.columns() {
            if !known.contains(&column) {
                match self.unknown_columns {
                    UnknownColumnPolicy::Reject => {
                        return Err(Error::schema_violation(column));
                    }
                    UnknownColumnPolicy::Warn => {
                        warn!("Extra column found: {}", column);
                    }
                }
            }
        }

        Ok(())
    }
}

/// Best-effort record identifier for diagnostics on rows that may not have one
fn identifier_hint(row: &RawRow) -> String {
    let text = row.cell(IDENTIFIER_COLUMN).display_text();
    if text.is_empty() {
        "<missing>".to_string()
    } else {
        text
    }
}

/// Apply one field table entry's parser to a cell
fn parse_field(spec: &FieldSpec, cell: &CellValue) -> Result<Option<ParsedValue>> {
    let parsed = match spec.kind {
        FieldKind::Identifier => ParsedValue::Text(parse_identifier(cell, spec.column)?),
        FieldKind::Text => ParsedValue::Text(cell.display_text()),
        FieldKind::PublicationDate => {
            ParsedValue::Date(parse_publication_date(cell, spec.column)?)
        }
        FieldKind::ExtentDate => ParsedValue::Date(parse_extent_date(cell, spec.column)?),
        FieldKind::ContactList => ParsedValue::Contacts(parse_contact_list(cell, spec.column)?),
        FieldKind::List => ParsedValue::List(parse_list(cell)),
        FieldKind::KeyedBlock { keys, complete } => {
            match parse_keyed_block(cell, spec.column, keys, complete)? {
                Some(block) => ParsedValue::Block(block),
                None => ParsedValue::Null,
            }
        }
        FieldKind::VocabKeywords { keyword_type } => {
            ParsedValue::Keywords(parse_vocab_keywords(cell, keyword_type))
        }
        FieldKind::DescriptiveKeywords => {
            ParsedValue::Keywords(parse_descriptive_keywords(cell, spec.column)?)
        }
        FieldKind::BoundingBox => ParsedValue::BoundingBox(parse_bounding_box(cell, spec.column)?),
        FieldKind::ControlledText { table } => {
            ParsedValue::Text(canonical_controlled(cell, table, spec.column)?)
        }
        FieldKind::Timestamp => match parse_metadata_timestamp(cell, spec.column)? {
            Some(dt) => ParsedValue::Date(dt),
            None => ParsedValue::Null,
        },
        FieldKind::Unused => return Ok(None),
    };

    Ok(Some(parsed))
}

/// Coerce the identifier cell to an integer-valued string.
///
/// Spreadsheets store numeric identifiers as floats; `41007.0` must publish
/// as `"41007"`.
fn parse_identifier(cell: &CellValue, field: &str) -> Result<String> {
    match cell {
        CellValue::Number(n) if n.is_finite() => Ok(format!("{}", *n as i64)),
        CellValue::Text(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(Error::field_parse(field, "record identifier is missing")),
    }
}

/// Canonicalize a controlled-vocabulary text value through a lookup table
fn canonical_controlled(
    cell: &CellValue,
    table: &[(&str, &str)],
    field: &str,
) -> Result<String> {
    let folded = cell.display_text().to_lowercase();

    table
        .iter()
        .find(|(from, _)| *from == folded)
        .map(|(_, to)| to.to_string())
        .ok_or_else(|| {
            Error::field_parse(field, format!("unrecognized value '{}'", folded))
        })
}

/// Store a parsed value under its canonical field name.
///
/// Contact and keyword columns share one accumulating target so that column
/// declaration order, then within-column order, is preserved.
fn accumulate(
    values: &mut HashMap<&'static str, ParsedValue>,
    spec: &FieldSpec,
    parsed: ParsedValue,
) {
    let target = match spec.kind {
        FieldKind::ContactList => "responsibleParties",
        FieldKind::VocabKeywords { .. } | FieldKind::DescriptiveKeywords => "descriptiveKeywords",
        _ => spec.column,
    };

    match (values.get_mut(target), parsed) {
        (Some(ParsedValue::Contacts(existing)), ParsedValue::Contacts(mut more)) => {
            existing.append(&mut more);
        }
        (Some(ParsedValue::Keywords(existing)), ParsedValue::Keywords(mut more)) => {
            existing.append(&mut more);
        }
        (_, parsed) => {
            values.insert(target, parsed);
        }
    }
}

/// Assemble the typed record from the accumulated parsed values
fn build_record(mut values: HashMap<&'static str, ParsedValue>) -> Result<NormalizedRecord> {
    let publication_date = take_date(&mut values, "date")
        .ok_or_else(|| Error::field_parse("date", "publication date is missing"))?;
    let bounding_box = match values.remove("boundingBox") {
        Some(ParsedValue::BoundingBox(bbox)) => bbox,
        _ => return Err(Error::field_parse("boundingBox", "bounding box is missing")),
    };

    Ok(NormalizedRecord {
        file_identifier: take_text(&mut values, "fileIdentifier"),
        title: take_text(&mut values, "title"),
        publication_date,
        responsible_parties: match values.remove("responsibleParties") {
            Some(ParsedValue::Contacts(contacts)) => contacts,
            _ => Vec::new(),
        },
        keywords: take_list(&mut values, "keyword"),
        topic_categories: take_list(&mut values, "topicCategories"),
        descriptive_keywords: match values.remove("descriptiveKeywords") {
            Some(ParsedValue::Keywords(keywords)) => keywords,
            _ => Vec::new(),
        },
        geographic_identifier: take_text(&mut values, "geographicIdentifier"),
        bounding_box,
        start_time: take_date(&mut values, "startTime"),
        end_time: take_date(&mut values, "endTime"),
        language: take_text(&mut values, "languages"),
        spatial_resolution: take_text(&mut values, "spatialResolution"),
        abstract_text: take_text(&mut values, "abstract"),
        format_name: take_text(&mut values, "formatName"),
        spatial_representation_type: take_text(&mut values, "spatialRepresentationType"),
        reference_system: take_block(&mut values, "referenceSystemName")
            .map(|block| ReferenceSystem::from_block(&block)),
        lineage_statement: take_text(&mut values, "lineageStatement"),
        online_resource: take_block(&mut values, "onlineResources")
            .map(|block| OnlineResource::from_block(&block)),
        metadata_standard_name: take_text(&mut values, "metadataStandardName"),
        metadata_standard_version: take_text(&mut values, "metadataStandardVersion"),
        metadata_timestamp: take_date(&mut values, "metadataTimestamp"),
        scope: take_text(&mut values, "scope"),
        status: take_text(&mut values, "status"),
        rights: take_text(&mut values, "rights"),
        rights_uri: take_text(&mut values, "rightsURI"),
        access_constraints: take_text(&mut values, "accessConstraints"),
        related_identifier: take_block(&mut values, "relatedIdentifiers")
            .map(|block| RelatedIdentifier::from_block(&block)),
    })
}

fn take_text(values: &mut HashMap<&'static str, ParsedValue>, key: &str) -> String {
    match values.remove(key) {
        Some(ParsedValue::Text(text)) => text,
        _ => String::new(),
    }
}

fn take_list(values: &mut HashMap<&'static str, ParsedValue>, key: &str) -> Vec<String> {
    match values.remove(key) {
        Some(ParsedValue::List(list)) => list,
        _ => Vec::new(),
    }
}

fn take_date(
    values: &mut HashMap<&'static str, ParsedValue>,
    key: &str,
) -> Option<NaiveDateTime> {
    match values.remove(key) {
        Some(ParsedValue::Date(dt)) => Some(dt),
        _ => None,
    }
}

fn take_block(
    values: &mut HashMap<&'static str, ParsedValue>,
    key: &str,
) -> Option<BTreeMap<String, String>> {
    match values.remove(key) {
        Some(ParsedValue::Block(block)) => Some(block),
        _ => None,
    }
}
