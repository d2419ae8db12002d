//! MIMS Importer Library
//!
//! A Rust library for converting MIMS metadata master sheet records into
//! catalog metadata documents and publishing them to the ODP catalog API.
//!
//! This library provides tools for:
//! - Reading metadata master sheets (Excel workbooks or CSV exports) into raw rows
//! - Decoding the pipe-and-colon encoded text fields embedded in sheet cells
//!   (contact lists, bounding boxes, keyword sets, related-identifier references)
//! - Normalizing raw rows into typed records with per-row failure isolation
//! - Assembling normalized records into the fixed catalog document schema
//! - Publishing finished documents to the catalog API with explicit outcome
//!   accounting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_publisher;
        pub mod field_parsers;
        pub mod record_normalizer;
        pub mod schema_builder;
        pub mod sheet_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CellValue, NormalizedRecord, RawRow};
pub use app::services::record_normalizer::RecordNormalizer;
pub use app::services::schema_builder::MetadataDocument;
pub use config::Config;

/// Result type alias for the MIMS importer
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for MIMS import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Spreadsheet reading error
    #[error("Sheet reading error in file '{file}': {message}")]
    SheetRead { file: String, message: String },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Encoded field could not be decoded
    #[error("Parse error in field '{field}': {message}")]
    FieldParse { field: String, message: String },

    /// Document builder received a structurally invalid value
    #[error("Schema shape error: {message}")]
    SchemaShape { message: String },

    /// Input row contains a column outside the known schema
    #[error("Unknown column in input row: '{column}'")]
    SchemaViolation { column: String },

    /// Date/time value matched none of the supported formats
    #[error("Date/time parsing error: no supported format matched '{value}'")]
    DateTimeParsing { value: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Catalog publishing error
    #[error("Catalog publishing error: {message}")]
    Publish {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a sheet reading error
    pub fn sheet_read(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SheetRead {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a field parse error
    pub fn field_parse(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldParse {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a schema shape error
    pub fn schema_shape(message: impl Into<String>) -> Self {
        Self::SchemaShape {
            message: message.into(),
        }
    }

    /// Create an unknown-column error
    pub fn schema_violation(column: impl Into<String>) -> Self {
        Self::SchemaViolation {
            column: column.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(value: impl Into<String>) -> Self {
        Self::DateTimeParsing {
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a publishing error
    pub fn publish(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Publish {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<calamine::Error> for Error {
    fn from(error: calamine::Error) -> Self {
        Self::SheetRead {
            file: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Publish {
            message: "Catalog request failed".to_string(),
            source: Some(error),
        }
    }
}
