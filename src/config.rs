//! Configuration management and validation.
//!
//! Provides configuration structures for the import pipeline and the catalog
//! publisher, with builder-style constructors and validation of the values
//! that cannot be expressed in the type system (offset strings, routing keys).

use crate::app::services::record_normalizer::SchemaVersion;
use crate::constants;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Policy applied when an input row carries a column outside the known schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownColumnPolicy {
    /// Reject the record with a schema violation
    Reject,
    /// Log a warning and continue processing the record
    Warn,
}

/// Global configuration for the import pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Master sheet schema version selecting the field table
    pub schema_version: SchemaVersion,

    /// Policy for columns outside the known schema
    pub unknown_columns: UnknownColumnPolicy,

    /// Fixed UTC offset suffix appended to rendered document timestamps
    pub timestamp_offset: String,

    /// Catalog publisher settings
    pub publisher: PublisherConfig,
}

/// Configuration for the catalog publisher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Catalog API base URL
    pub base_url: String,

    /// Organization routing key
    pub organization: String,

    /// Collection routing key
    pub collection: String,

    /// Metadata schema routing key
    pub schema_key: String,

    /// Advance each published record's workflow state after a successful add
    pub advance_workflow: bool,

    /// Workflow state requested when advancing
    pub workflow_state: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::Master2019,
            unknown_columns: UnknownColumnPolicy::Warn,
            timestamp_offset: constants::DEFAULT_TIMESTAMP_OFFSET.to_string(),
            publisher: PublisherConfig::default(),
        }
    }
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_CATALOG_BASE_URL.to_string(),
            organization: constants::DEFAULT_ORGANIZATION_KEY.to_string(),
            collection: constants::DEFAULT_COLLECTION_KEY.to_string(),
            schema_key: constants::DEFAULT_SCHEMA_KEY.to_string(),
            advance_workflow: false,
            workflow_state: constants::WORKFLOW_STATE_PUBLISHED.to_string(),
        }
    }
}

impl Config {
    /// Create configuration with a specific schema version
    pub fn with_schema_version(mut self, version: SchemaVersion) -> Self {
        self.schema_version = version;
        self
    }

    /// Reject records carrying unknown columns instead of warning
    pub fn with_strict_columns(mut self) -> Self {
        self.unknown_columns = UnknownColumnPolicy::Reject;
        self
    }

    /// Create configuration with a custom timestamp offset suffix
    pub fn with_timestamp_offset(mut self, offset: impl Into<String>) -> Self {
        self.timestamp_offset = offset.into();
        self
    }

    /// Create configuration with custom publisher settings
    pub fn with_publisher(mut self, publisher: PublisherConfig) -> Self {
        self.publisher = publisher;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_offset(&self.timestamp_offset)?;
        self.publisher.validate()
    }
}

impl PublisherConfig {
    /// Create publisher configuration with a custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create publisher configuration with custom routing keys
    pub fn with_routing(
        mut self,
        organization: impl Into<String>,
        collection: impl Into<String>,
        schema_key: impl Into<String>,
    ) -> Self {
        self.organization = organization.into();
        self.collection = collection.into();
        self.schema_key = schema_key.into();
        self
    }

    /// Enable the workflow-state advance after each successful add
    pub fn with_workflow_advance(mut self) -> Self {
        self.advance_workflow = true;
        self
    }

    /// Validate publisher configuration values
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::configuration("Catalog base URL cannot be empty"));
        }

        for (name, value) in [
            ("organization", &self.organization),
            ("collection", &self.collection),
            ("schema key", &self.schema_key),
        ] {
            if value.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Publisher {} cannot be empty",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Validate a timestamp offset suffix of the form `+HH:MM` or `-HH:MM`
fn validate_offset(offset: &str) -> Result<()> {
    let bytes = offset.as_bytes();
    let well_formed = bytes.len() == 6
        && (bytes[0] == b'+' || bytes[0] == b'-')
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_digit()
        && bytes[3] == b':'
        && bytes[4].is_ascii_digit()
        && bytes[5].is_ascii_digit();

    if !well_formed {
        return Err(Error::configuration(format!(
            "Invalid timestamp offset '{}': expected +HH:MM or -HH:MM",
            offset
        )));
    }

    let hours: u32 = offset[1..3].parse().unwrap_or(99);
    let minutes: u32 = offset[4..6].parse().unwrap_or(99);
    if hours > 14 || minutes > 59 {
        return Err(Error::configuration(format!(
            "Timestamp offset '{}' is out of range",
            offset
        )));
    }

    Ok(())
}
