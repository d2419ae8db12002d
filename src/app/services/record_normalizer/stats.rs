//! Import statistics and skip diagnostics
//!
//! Tracks how many rows were read, normalized, and assembled, and carries
//! one human-readable diagnostic per skipped record for the batch report.

/// Statistics for one import run
#[derive(Debug, Clone, PartialEq)]
pub struct ImportStats {
    /// Number of raw rows read from the sheet
    pub rows_read: usize,
    /// Number of rows successfully normalized
    pub normalized: usize,
    /// Number of records successfully assembled into documents
    pub assembled: usize,
    /// Number of records skipped at any stage
    pub skipped: usize,
    /// One human-readable line per skipped record
    pub diagnostics: Vec<String>,
}

impl ImportStats {
    /// Create new empty import statistics
    pub fn new() -> Self {
        Self {
            rows_read: 0,
            normalized: 0,
            assembled: 0,
            skipped: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Record one skipped record with its diagnostic line
    pub fn record_skip(&mut self, message: String) {
        self.skipped += 1;
        self.diagnostics.push(message);
    }

    /// Calculate the share of read rows that became documents, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            100.0
        } else {
            (self.assembled as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Check if the run was mostly successful (>90% of rows became documents)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// Get a one-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Import summary: {} rows -> {} normalized -> {} documents ({:.1}% success) | Skipped: {}",
            self.rows_read,
            self.normalized,
            self.assembled,
            self.success_rate(),
            self.skipped
        )
    }
}

impl Default for ImportStats {
    fn default() -> Self {
        Self::new()
    }
}
