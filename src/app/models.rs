//! Data models for MIMS sheet import
//!
//! This module contains the core data structures for representing raw sheet
//! rows, the values decoded from encoded sheet cells, and the normalized
//! record consumed by the schema builder.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Cell Values and Raw Rows
// =============================================================================

/// A typed sheet cell value.
///
/// The variant is decided once at the ingestion boundary; every downstream
/// parser is a pure function of the variant rather than inspecting runtime
/// types. A blank or unreadable cell is `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Textual cell content
    Text(String),
    /// Numeric cell content (spreadsheet numbers are always floats)
    Number(f64),
    /// Date/time cell content
    Date(NaiveDateTime),
    /// Blank or missing cell
    Empty,
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// Check whether the cell carries no content
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Render the cell as trimmed display text; `Empty` renders as ""
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Date(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Get the integral value of a numeric cell, if it has one
    pub fn as_integral(&self) -> Option<i64> {
        match self {
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => Some(*n as i64),
            _ => None,
        }
    }
}

/// One raw sheet row: a mapping from column name to cell value
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// One-based row number in the source sheet, for diagnostics
    pub index: usize,

    /// Column name to cell value
    pub cells: HashMap<String, CellValue>,
}

impl RawRow {
    /// Create a raw row from its source position and cells
    pub fn new(index: usize, cells: HashMap<String, CellValue>) -> Self {
        Self { index, cells }
    }

    /// Get a cell by column name; an absent column reads as an empty cell
    pub fn cell(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }

    /// Iterate over the column names present in this row
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(|k| k.as_str())
    }
}

// =============================================================================
// Decoded Field Values
// =============================================================================

/// A responsible-party contact decoded from a pipe-encoded contact block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub individual_name: String,
    pub organization_name: String,
    pub position_name: String,
    pub contact_info: String,
    /// Canonical camel-case role identifier
    pub role: String,
    pub email: String,
}

/// A single descriptive keyword with its vocabulary type tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword_type: String,
    pub keyword: String,
}

impl KeywordEntry {
    pub fn new(keyword_type: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            keyword_type: keyword_type.into(),
            keyword: keyword.into(),
        }
    }
}

/// Rectangular geographic extent in WGS84 decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Validate bound ranges and orientation
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value, limit) in [
            ("northBoundLatitude", self.north, 90.0),
            ("southBoundLatitude", self.south, 90.0),
            ("eastBoundLongitude", self.east, 180.0),
            ("westBoundLongitude", self.west, 180.0),
        ] {
            if !(-limit..=limit).contains(&value) {
                return Err(crate::Error::schema_shape(format!(
                    "Invalid {} {}: must be between -{} and {} degrees",
                    name, value, limit, limit
                )));
            }
        }

        if self.south > self.north {
            return Err(crate::Error::schema_shape(format!(
                "Invalid bounding box: south bound {} exceeds north bound {}",
                self.south, self.north
            )));
        }

        Ok(())
    }
}

/// A reference from one record to another resource, e.g. a DOI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedIdentifier {
    pub related_identifier: String,
    pub related_identifier_type: String,
    pub relation_type: String,
}

impl RelatedIdentifier {
    /// Build from a decoded keyed block, scrubbing stray whitespace and
    /// semicolons that leak in from sheet editing
    pub fn from_block(block: &BTreeMap<String, String>) -> Self {
        let clean = |key: &str| -> String {
            block
                .get(key)
                .map(|v| v.replace([' ', ';', '\n'], ""))
                .unwrap_or_default()
        };

        Self {
            related_identifier: clean("relatedIdentifier"),
            related_identifier_type: clean("relatedIdentifierType"),
            relation_type: clean("relationType"),
        }
    }
}

/// An online resource descriptor decoded from a keyed block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnlineResource {
    pub name: String,
    pub description: String,
    pub linkage: String,
}

impl OnlineResource {
    /// Build from a decoded keyed block; description and linkage have spaces
    /// stripped since both are identifiers rather than prose
    pub fn from_block(block: &BTreeMap<String, String>) -> Self {
        Self {
            name: block.get("name").cloned().unwrap_or_default(),
            description: block
                .get("description")
                .map(|v| v.replace(' ', ""))
                .unwrap_or_default(),
            linkage: block
                .get("linkage")
                .map(|v| v.replace(' ', ""))
                .unwrap_or_default(),
        }
    }
}

/// Spatial reference system name decoded from a keyed block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSystem {
    pub code_space: String,
    pub version: String,
}

impl ReferenceSystem {
    pub fn from_block(block: &BTreeMap<String, String>) -> Self {
        Self {
            code_space: block
                .get("codeSpace")
                .map(|v| v.replace(' ', ""))
                .unwrap_or_default(),
            version: block
                .get("version")
                .map(|v| v.replace(' ', ""))
                .unwrap_or_default(),
        }
    }
}

/// Output of one field parser, accumulated per column during normalization
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    /// Explicit null for a blank cell
    Null,
    Text(String),
    List(Vec<String>),
    Contacts(Vec<Contact>),
    Keywords(Vec<KeywordEntry>),
    Block(BTreeMap<String, String>),
    BoundingBox(BoundingBox),
    Date(NaiveDateTime),
}

// =============================================================================
// Normalized Record
// =============================================================================

/// One fully normalized sheet record.
///
/// Every field the schema builder reads is present after normalization
/// succeeds; optional fields model values the source sheet legitimately
/// leaves blank. A row that cannot populate this structure is skipped with a
/// diagnostic and never reaches the builder.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub file_identifier: String,
    pub title: String,
    pub publication_date: NaiveDateTime,
    pub responsible_parties: Vec<Contact>,
    /// Free-text keyword list; retained for auditing, not published
    pub keywords: Vec<String>,
    pub topic_categories: Vec<String>,
    pub descriptive_keywords: Vec<KeywordEntry>,
    pub geographic_identifier: String,
    pub bounding_box: BoundingBox,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub language: String,
    pub spatial_resolution: String,
    pub abstract_text: String,
    pub format_name: String,
    pub spatial_representation_type: String,
    pub reference_system: Option<ReferenceSystem>,
    pub lineage_statement: String,
    pub online_resource: Option<OnlineResource>,
    pub metadata_standard_name: String,
    pub metadata_standard_version: String,
    pub metadata_timestamp: Option<NaiveDateTime>,
    pub scope: String,
    pub status: String,
    pub rights: String,
    pub rights_uri: String,
    pub access_constraints: String,
    pub related_identifier: Option<RelatedIdentifier>,
}
