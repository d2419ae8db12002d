//! Catalog document schema assembly
//!
//! Builds the fixed-shape catalog metadata document from one normalized
//! record at a time. The builder validates every value before storing it and
//! fails fast on structural problems, so a half-built document is never
//! emitted; finishing the builder consumes it, freezing the document.
//!
//! ## Architecture
//!
//! - [`document`] - the serializable document model
//! - [`builder`] - the fail-fast document builder
//! - [`assemble`] - mapping a normalized record through the builder

pub mod assemble;
pub mod builder;
pub mod document;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use assemble::assemble_document;
pub use builder::MetadataDocumentBuilder;
pub use document::MetadataDocument;
