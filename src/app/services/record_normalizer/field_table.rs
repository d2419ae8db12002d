//! Schema versions and their field tables
//!
//! A field table declares, per master sheet column, which parser decodes the
//! column and whether a parse failure aborts the record or leaves the field
//! at its default. New sheet revisions add a table here instead of a new
//! importer.

use crate::constants::{
    KEYWORD_TYPE_PLACE, KEYWORD_TYPE_STRATUM, MASTER_2019_COLUMNS, ONLINE_RESOURCE_KEYS,
    REFERENCE_SYSTEM_KEYS, RELATED_IDENTIFIER_KEYS, REPRESENTATION_TYPE_FIXES,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Master sheet schema versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// The 2019 metadata master sheet layout
    Master2019,
}

impl SchemaVersion {
    /// Stable name used on the command line and in logs
    pub fn name(&self) -> &'static str {
        match self {
            SchemaVersion::Master2019 => "master-2019",
        }
    }

    /// All columns this schema version recognizes
    pub fn known_columns(&self) -> &'static [&'static str] {
        match self {
            SchemaVersion::Master2019 => MASTER_2019_COLUMNS,
        }
    }

    /// The field table for this schema version, in processing order
    pub fn field_table(&self) -> &'static [FieldSpec] {
        match self {
            SchemaVersion::Master2019 => MASTER_2019_TABLE,
        }
    }

    /// Names of all supported schema versions
    pub fn available() -> &'static [&'static str] {
        &["master-2019"]
    }
}

impl FromStr for SchemaVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "master-2019" => Ok(SchemaVersion::Master2019),
            other => Err(Error::configuration(format!(
                "Unknown schema version '{}'. Available versions: {}",
                other,
                SchemaVersion::available().join(", ")
            ))),
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether a parse failure aborts the record or defaults the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    /// Failure skips the whole record
    Critical,
    /// Failure logs a warning and leaves the field at its default
    Optional,
}

/// Parser kind applied to a column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Record identifier with numeric-cell coercion
    Identifier,
    /// Plain text passthrough
    Text,
    /// Publication date with multi-format decoding
    PublicationDate,
    /// Temporal extent date with time-bearing formats
    ExtentDate,
    /// Newline/pipe encoded contact block, appending across columns
    ContactList,
    /// Comma-separated list
    List,
    /// Flat pipe-separated `key:value` block
    KeyedBlock {
        keys: &'static [&'static str],
        complete: bool,
    },
    /// Vocabulary keyword column with a fixed type tag
    VocabKeywords { keyword_type: &'static str },
    /// Free-text descriptive keyword block
    DescriptiveKeywords,
    /// Four-bound geographic extent
    BoundingBox,
    /// Controlled-vocabulary text canonicalized through a lookup table
    ControlledText {
        table: &'static [(&'static str, &'static str)],
    },
    /// Strict metadata timestamp
    Timestamp,
    /// Known column that is audited but not consumed
    Unused,
}

/// One field table entry
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub column: &'static str,
    pub kind: FieldKind,
    pub criticality: Criticality,
}

const fn critical(column: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        column,
        kind,
        criticality: Criticality::Critical,
    }
}

const fn optional(column: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        column,
        kind,
        criticality: Criticality::Optional,
    }
}

/// Field table of the 2019 master sheet.
///
/// Contact and keyword entries append in table order, so the three contact
/// columns land in one responsible-parties list with column declaration
/// order preserved.
pub const MASTER_2019_TABLE: &[FieldSpec] = &[
    critical("fileIdentifier", FieldKind::Identifier),
    critical("title", FieldKind::Text),
    critical("date", FieldKind::PublicationDate),
    critical("responsibleParties", FieldKind::ContactList),
    critical("responsibleParties.1", FieldKind::ContactList),
    critical("responsibleParties.Publisher", FieldKind::ContactList),
    critical("keyword", FieldKind::List),
    critical("topicCategories", FieldKind::List),
    critical(
        "relatedIdentifiers",
        FieldKind::KeyedBlock {
            keys: RELATED_IDENTIFIER_KEYS,
            complete: false,
        },
    ),
    critical(
        "onlineResources",
        FieldKind::KeyedBlock {
            keys: ONLINE_RESOURCE_KEYS,
            complete: false,
        },
    ),
    critical(
        "referenceSystemName",
        FieldKind::KeyedBlock {
            keys: REFERENCE_SYSTEM_KEYS,
            complete: false,
        },
    ),
    critical("descriptiveKeywords", FieldKind::DescriptiveKeywords),
    critical(
        "placeKeywords (CV)",
        FieldKind::VocabKeywords {
            keyword_type: KEYWORD_TYPE_PLACE,
        },
    ),
    critical(
        "instrumentKeywords (CV)",
        FieldKind::VocabKeywords {
            keyword_type: KEYWORD_TYPE_STRATUM,
        },
    ),
    critical("boundingBox", FieldKind::BoundingBox),
    optional("startTime", FieldKind::ExtentDate),
    optional("endTime", FieldKind::ExtentDate),
    optional("metadataTimestamp", FieldKind::Timestamp),
    critical(
        "spatialRepresentationType",
        FieldKind::ControlledText {
            table: REPRESENTATION_TYPE_FIXES,
        },
    ),
    critical("geographicIdentifier", FieldKind::Text),
    critical("languages", FieldKind::Text),
    optional("spatialResolution", FieldKind::Text),
    critical("abstract", FieldKind::Text),
    optional("formatName", FieldKind::Text),
    optional("lineageStatement", FieldKind::Text),
    critical("metadataStandardName", FieldKind::Text),
    critical("metadataStandardVersion", FieldKind::Text),
    critical("scope", FieldKind::Text),
    critical("status", FieldKind::Text),
    critical("rights", FieldKind::Text),
    critical("rightsURI", FieldKind::Text),
    critical("accessConstraints", FieldKind::Text),
    critical("DOI", FieldKind::Unused),
    critical("verticalElement", FieldKind::Unused),
];
