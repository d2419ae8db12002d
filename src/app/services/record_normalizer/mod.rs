//! Record normalization for MIMS master sheet rows
//!
//! The normalizer turns one raw sheet row into one typed record by applying
//! the encoded-field parsers column by column. Earlier importer generations
//! each carried their own copy of this logic; here a single code path is
//! driven by a per-schema-version field table mapping column name to parser
//! kind and failure policy.
//!
//! ## Architecture
//!
//! - [`field_table`] - schema versions and their column/parser tables
//! - [`normalizer`] - per-row orchestration and failure isolation
//! - [`stats`] - import statistics and skip diagnostics
//!
//! Failure of one row never affects the rows that follow: a row that cannot
//! be normalized is reported and dropped, and the batch continues.

pub mod field_table;
pub mod normalizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_table::{Criticality, FieldKind, FieldSpec, SchemaVersion};
pub use normalizer::RecordNormalizer;
pub use stats::ImportStats;
