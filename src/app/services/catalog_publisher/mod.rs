//! Catalog publishing over HTTP
//!
//! Pushes finished metadata documents to the catalog API and optionally
//! advances each published record's workflow state. The publisher is an
//! opaque sink from the pipeline's point of view: one document in, one
//! outcome value out, no retries. Callers aggregate outcomes into explicit
//! [`PublishStats`]; there is no process-wide counter state.
//!
//! ## Architecture
//!
//! - [`client`] - the reqwest-based API client
//! - [`outcome`] - per-call outcomes and their aggregation

pub mod client;
pub mod outcome;

// Re-export main types for easy access
pub use client::CatalogPublisher;
pub use outcome::{PublishOutcome, PublishStats};
