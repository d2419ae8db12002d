//! Command-line argument definitions for the MIMS importer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::services::record_normalizer::SchemaVersion;
use crate::config::{Config, PublisherConfig};
use crate::constants::{
    CATALOG_API_KEY_ENV, DEFAULT_CATALOG_BASE_URL, DEFAULT_COLLECTION_KEY,
    DEFAULT_ORGANIZATION_KEY, DEFAULT_SCHEMA_KEY, DEFAULT_TIMESTAMP_OFFSET,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the MIMS metadata importer
///
/// Converts MIMS metadata master sheet records into catalog metadata
/// documents and optionally publishes them to the catalog API.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mims-importer",
    version,
    about = "Convert MIMS metadata master sheet records into catalog metadata documents",
    long_about = "A batch tool that reads a MIMS metadata master sheet (Excel workbook or CSV \
                  export), decodes the encoded contact, keyword, extent and identifier cells \
                  into a normalized record per row, assembles each record into the catalog \
                  document schema, and optionally publishes the documents to the catalog API."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the MIMS importer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import a master sheet and assemble catalog documents (main command)
    Import(ImportArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Path to the master sheet file
    ///
    /// An Excel workbook (.xlsx, .xls) or a CSV export of the sheet.
    #[arg(
        short = 'f',
        long = "sheet-file",
        value_name = "FILE",
        help = "Path to the master sheet file (Excel workbook or CSV export)"
    )]
    pub sheet_file: PathBuf,

    /// Worksheet name inside the workbook
    ///
    /// Defaults to the first sheet. Ignored for CSV input.
    #[arg(
        short = 's',
        long = "sheet",
        value_name = "NAME",
        help = "Worksheet name inside the workbook (defaults to the first sheet)"
    )]
    pub sheet: Option<String>,

    /// Master sheet schema version
    #[arg(
        long = "schema-version",
        value_name = "VERSION",
        default_value = "master-2019",
        help = "Master sheet schema version selecting the field table"
    )]
    pub schema_version: SchemaVersion,

    /// Reject records carrying columns outside the known schema
    ///
    /// By default unknown columns only produce a warning and the record is
    /// still processed.
    #[arg(
        long = "strict-columns",
        help = "Reject records carrying unknown columns instead of warning"
    )]
    pub strict_columns: bool,

    /// Fixed UTC offset suffix for rendered document timestamps
    #[arg(
        long = "timestamp-offset",
        value_name = "OFFSET",
        default_value = DEFAULT_TIMESTAMP_OFFSET,
        help = "Fixed UTC offset suffix for document timestamps (+HH:MM or -HH:MM)"
    )]
    pub timestamp_offset: String,

    /// Publish assembled documents to the catalog API
    ///
    /// Requires the catalog API key in the environment.
    #[arg(long = "publish", help = "Publish assembled documents to the catalog API")]
    pub publish: bool,

    /// Parse and assemble without publishing
    #[arg(
        long = "dry-run",
        conflicts_with = "publish",
        help = "Parse and assemble documents without publishing"
    )]
    pub dry_run: bool,

    /// Write assembled documents to a JSON file
    #[arg(
        short = 'o',
        long = "output-json",
        value_name = "FILE",
        help = "Write assembled documents to a JSON file"
    )]
    pub output_json: Option<PathBuf>,

    /// Catalog API base URL
    #[arg(
        long = "api-url",
        value_name = "URL",
        default_value = DEFAULT_CATALOG_BASE_URL,
        help = "Catalog API base URL"
    )]
    pub api_url: String,

    /// Organization routing key for publishing
    #[arg(
        long = "organization",
        value_name = "KEY",
        default_value = DEFAULT_ORGANIZATION_KEY,
        help = "Organization routing key"
    )]
    pub organization: String,

    /// Collection routing key for publishing
    #[arg(
        long = "collection",
        value_name = "KEY",
        default_value = DEFAULT_COLLECTION_KEY,
        help = "Collection routing key"
    )]
    pub collection: String,

    /// Metadata schema routing key for publishing
    #[arg(
        long = "schema-key",
        value_name = "KEY",
        default_value = DEFAULT_SCHEMA_KEY,
        help = "Metadata schema routing key"
    )]
    pub schema_key: String,

    /// Advance each published record's workflow state
    #[arg(
        long = "advance-workflow",
        requires = "publish",
        help = "Advance each published record's workflow state after a successful add"
    )]
    pub advance_workflow: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ImportArgs {
    /// Validate the import command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.sheet_file.exists() {
            return Err(Error::configuration(format!(
                "Sheet file does not exist: {}",
                self.sheet_file.display()
            )));
        }

        if !self.sheet_file.is_file() {
            return Err(Error::configuration(format!(
                "Sheet file is not a file: {}",
                self.sheet_file.display()
            )));
        }

        if let Some(output_json) = &self.output_json {
            if let Some(parent) = output_json.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        if self.publish && std::env::var(CATALOG_API_KEY_ENV).is_err() {
            return Err(Error::configuration(format!(
                "Publishing requires the {} environment variable",
                CATALOG_API_KEY_ENV
            )));
        }

        // Offset and routing validation lives on the config
        self.to_config().validate()
    }

    /// Build the importer configuration from these arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::default()
            .with_schema_version(self.schema_version)
            .with_timestamp_offset(&self.timestamp_offset)
            .with_publisher(
                PublisherConfig::default()
                    .with_base_url(&self.api_url)
                    .with_routing(&self.organization, &self.collection, &self.schema_key),
            );

        if self.strict_columns {
            config = config.with_strict_columns();
        }
        if self.advance_workflow {
            config.publisher.advance_workflow = true;
        }

        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for ImportArgs {
    fn default() -> Self {
        Self {
            sheet_file: PathBuf::new(),
            sheet: None,
            schema_version: SchemaVersion::Master2019,
            strict_columns: false,
            timestamp_offset: DEFAULT_TIMESTAMP_OFFSET.to_string(),
            publish: false,
            dry_run: false,
            output_json: None,
            api_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            organization: DEFAULT_ORGANIZATION_KEY.to_string(),
            collection: DEFAULT_COLLECTION_KEY.to_string(),
            schema_key: DEFAULT_SCHEMA_KEY.to_string(),
            advance_workflow: false,
            verbose: 0,
            quiet: false,
        }
    }
}
