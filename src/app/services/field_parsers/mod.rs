//! Encoded-field parsers for MIMS master sheet cells
//!
//! Master sheet cells embed structured data in delimiter conventions that
//! evolved with the sheet itself: newline-separated contact blocks with
//! pipe-separated `key:value` segments, flat pipe-separated keyed blocks,
//! comma-separated lists, and a handful of date formats. This module provides
//! one pure decoder per convention; each takes a typed [`CellValue`] and
//! returns a structured value or a parse error naming the offending input.
//!
//! ## Architecture
//!
//! - [`contacts`] - newline/pipe encoded responsible-party blocks
//! - [`keyed_block`] - flat pipe-separated `key:value` mappings
//! - [`lists`] - comma-separated lists and keyword entries
//! - [`bounding_box`] - numeric four-bound geographic extents
//! - [`dates`] - multi-format date and timestamp decoding
//!
//! [`CellValue`]: crate::app::models::CellValue

pub mod bounding_box;
pub mod contacts;
pub mod dates;
pub mod keyed_block;
pub mod lists;

#[cfg(test)]
pub mod tests;

// Re-export the parser entry points for easy access
pub use bounding_box::parse_bounding_box;
pub use contacts::parse_contact_list;
pub use dates::{parse_extent_date, parse_metadata_timestamp, parse_publication_date};
pub use keyed_block::parse_keyed_block;
pub use lists::{parse_descriptive_keywords, parse_list, parse_vocab_keywords};
