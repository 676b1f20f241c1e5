//! Catalog parser for the Google Play Device Catalog CSV export
//!
//! This module converts the raw catalog text into validated [`DeviceRecord`]s
//! and reports every row it had to discard together with the reason.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and quote validation
//! - [`column_mapping`] - Header label to column index resolution
//! - [`field_parsers`] - Field lookup and multi-value decomposition
//! - [`record_parser`] - Per-row pipeline: required fields, form factor, record assembly
//! - [`stats`] - Row statistics and discard reason frequencies
//!
//! ## Usage
//!
//! ```rust
//! use device_catalog_parser::app::services::catalog_parser::CatalogParser;
//! use device_catalog_parser::ParserConfig;
//!
//! # fn example(csv: &str) -> device_catalog_parser::Result<()> {
//! let parser = CatalogParser::new(ParserConfig::default());
//! let outcome = parser.parse_with_stats(csv)?;
//!
//! println!("Parsed {} devices from {} rows",
//!          outcome.successful_count(),
//!          outcome.total_rows);
//! # Ok(())
//! # }
//! ```
//!
//! [`DeviceRecord`]: crate::app::models::DeviceRecord

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::{CatalogParser, parse_device_catalog, parse_device_catalog_with_stats};
pub use record_parser::DiscardReason;
pub use stats::ParseOutcome;
