//! Application constants for the MIMS importer
//!
//! This module contains the master sheet column sets, controlled-vocabulary
//! lookup tables, date formats, and publisher defaults used throughout the
//! importer.

// =============================================================================
// Master Sheet Columns
// =============================================================================

/// Known columns of the 2019 MIMS metadata master sheet
pub const MASTER_2019_COLUMNS: &[&str] = &[
    "fileIdentifier",
    "DOI",
    "date",
    "metadataStandardName",
    "metadataStandardVersion",
    "metadataTimestamp",
    "accessConstraints",
    "descriptiveKeywords",
    "title",
    "responsibleParties",
    "responsibleParties.1",
    "responsibleParties.Publisher",
    "keyword",
    "instrumentKeywords (CV)",
    "status",
    "topicCategories",
    "abstract",
    "languages",
    "formatName",
    "spatialRepresentationType",
    "spatialResolution",
    "referenceSystemName",
    "scope",
    "geographicIdentifier",
    "placeKeywords (CV)",
    "boundingBox",
    "verticalElement",
    "startTime",
    "endTime",
    "rights",
    "rightsURI",
    "lineageStatement",
    "onlineResources",
    "relatedIdentifiers",
];

/// Column holding the record identifier
pub const IDENTIFIER_COLUMN: &str = "fileIdentifier";

// =============================================================================
// Encoded Field Key Sets
// =============================================================================

/// Valid keys of a pipe-encoded contact block
pub const CONTACT_KEYS: &[&str] = &[
    "individualName",
    "organizationName",
    "positionName",
    "contactInfo",
    "role",
    "email",
];

/// Keys of the bounding box keyed block, all required
pub const BOUNDING_BOX_KEYS: &[&str] = &[
    "northBoundLatitude",
    "southBoundLatitude",
    "eastBoundLongitude",
    "westBoundLongitude",
];

/// Keys of the related-identifier keyed block
pub const RELATED_IDENTIFIER_KEYS: &[&str] =
    &["relatedIdentifier", "relatedIdentifierType", "relationType"];

/// Keys of the online-resource keyed block
pub const ONLINE_RESOURCE_KEYS: &[&str] = &["name", "description", "linkage"];

/// Keys of the reference-system keyed block
pub const REFERENCE_SYSTEM_KEYS: &[&str] = &["codeSpace", "version"];

/// Keys of a free-text descriptive keyword block
pub const DESCRIPTIVE_KEYWORD_KEYS: &[&str] = &["keywordType", "keyword"];

// =============================================================================
// Controlled Vocabularies
// =============================================================================

/// Canonical contact role identifiers keyed by their lowercased,
/// space-stripped free-text spellings as found in the master sheet
pub const ROLE_FIXES: &[(&str, &str)] = &[
    ("", ""),
    ("resourceprovider", "resourceProvider"),
    ("custodian", "custodian"),
    ("owner", "owner"),
    ("user", "user"),
    ("distributor", "distributor"),
    ("originator", "originator"),
    ("pointofcontact", "pointOfContact"),
    ("principleinvestigator", "principalInvestigator"),
    ("principalinvestigator", "principalInvestigator"),
    ("processor", "processor"),
    ("publisher", "publisher"),
];

/// Canonical spatial representation types keyed by lowercased sheet spellings
pub const REPRESENTATION_TYPE_FIXES: &[(&str, &str)] = &[
    ("", ""),
    ("vector", "vector"),
    ("grid", "grid"),
    ("texttable", "textTable"),
    ("tin", "tin"),
    ("stereomodel", "stereoModel"),
    ("video", "video"),
    ("image", "image"),
];

// =============================================================================
// Keyword Type Tags
// =============================================================================

/// Keyword type for free-text descriptive keywords
pub const KEYWORD_TYPE_THEME: &str = "theme";

/// Keyword type for place keyword columns
pub const KEYWORD_TYPE_PLACE: &str = "place";

/// Keyword type for instrument keyword columns
pub const KEYWORD_TYPE_STRATUM: &str = "stratum";

// =============================================================================
// Date Formats
// =============================================================================

/// Formats accepted for the publication date column, tried in order
pub const PUBLICATION_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y"];

/// Formats accepted for temporal extent start/end cells, tried in order
pub const EXTENT_DATE_FORMATS: &[&str] = &["%Y/%m/%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d"];

/// Strict format of the metadata timestamp column
pub const METADATA_TIMESTAMP_FORMAT: &str = "%Y-%m-%d";

/// Rendering format for document date-time values, before the offset suffix
pub const DOCUMENT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Rendering format for the document publication date
pub const DOCUMENT_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Document Defaults
// =============================================================================

/// Fixed UTC offset appended to rendered document timestamps.
///
/// The source organization records sheet times in its local zone; the offset
/// is configurable through [`crate::Config::timestamp_offset`].
pub const DEFAULT_TIMESTAMP_OFFSET: &str = "+02:00";

/// Character set recorded in every published document
pub const DOCUMENT_CHARACTER_SET: &str = "utf8";

/// Metadata language recorded in every published document
pub const DOCUMENT_METADATA_LANGUAGE: &str = "en";

// =============================================================================
// Catalog Publisher Defaults
// =============================================================================

/// Default catalog API base URL (staging)
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://odp.saeon.stg/api";

/// Environment variable holding the catalog API key
pub const CATALOG_API_KEY_ENV: &str = "CATALOG_API_KEY";

/// Default organization routing key
pub const DEFAULT_ORGANIZATION_KEY: &str = "dea";

/// Default collection routing key
pub const DEFAULT_COLLECTION_KEY: &str = "sadco-test";

/// Default metadata schema routing key
pub const DEFAULT_SCHEMA_KEY: &str = "sans-1878-1";

/// Workflow state requested after a successful publish
pub const WORKFLOW_STATE_PUBLISHED: &str = "mims-published";

/// Data agreement URL sent with every publish envelope
pub const DATA_AGREEMENT_URL: &str = "https://www.environment.gov.za/branches/oceans_coast";

/// Capture method recorded on published records
pub const CAPTURE_METHOD: &str = "harvester";

/// Year range accepted when a bare year is used as a date
pub const MIN_BARE_YEAR: i32 = 1000;
pub const MAX_BARE_YEAR: i32 = 9999;
