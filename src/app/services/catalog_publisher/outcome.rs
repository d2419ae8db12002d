//! Publish outcomes and their aggregation
//!
//! Every publisher call returns a value describing what the catalog did with
//! the document; the import command folds these into one [`PublishStats`]
//! for the batch report.

use serde_json::Value;

/// Outcome of one add-record call
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    /// Persistent identifier assigned by the catalog
    pub pid: Option<String>,
    /// Internal record id assigned by the catalog
    pub record_id: Option<String>,
    /// Whether the catalog validated the document
    pub validated: bool,
    /// Names of document fields the catalog flagged
    pub validation_errors: Vec<String>,
}

impl PublishOutcome {
    /// Extract the outcome from a catalog response body
    pub fn from_response(json: &Value) -> Self {
        let validation_errors = json["errors"]
            .as_object()
            .map(|errors| errors.keys().cloned().collect())
            .unwrap_or_default();

        Self {
            pid: json["pid"].as_str().map(|s| s.to_string()),
            record_id: json["id"].as_str().map(|s| s.to_string()),
            validated: json["validated"].as_bool().unwrap_or(false),
            validation_errors,
        }
    }

    /// Check whether the catalog accepted the document without complaints
    pub fn is_clean(&self) -> bool {
        self.validated && self.validation_errors.is_empty()
    }
}

/// Aggregated statistics for one publish run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishStats {
    /// Number of documents sent to the catalog
    pub attempted: usize,
    /// Number of documents the catalog accepted
    pub added: usize,
    /// Number of accepted documents with validation complaints
    pub validation_errors: usize,
    /// Number of records whose workflow state was advanced
    pub workflow_advanced: usize,
    /// Number of documents that failed outright
    pub failed: usize,
    /// One human-readable line per failed document
    pub failures: Vec<String>,
}

impl PublishStats {
    /// Create new empty publish statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one successful add-record outcome into the statistics
    pub fn record_added(&mut self, outcome: &PublishOutcome) {
        self.added += 1;
        if !outcome.validation_errors.is_empty() {
            self.validation_errors += 1;
        }
    }

    /// Record one failed document with its diagnostic line
    pub fn record_failure(&mut self, file_identifier: &str, message: String) {
        self.failed += 1;
        self.failures
            .push(format!("Record id {}: {}", file_identifier, message));
    }

    /// Get a one-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Publish summary: {} attempted, {} added ({} with validation errors), {} workflow advanced, {} failed",
            self.attempted, self.added, self.validation_errors, self.workflow_advanced, self.failed
        )
    }
}
