//! Device Catalog Parser Library
//!
//! A Rust library for converting the Google Play Device Catalog CSV export
//! into validated, strongly-typed device records.
//!
//! This library provides tools for:
//! - Header-driven extraction of the catalog's thirteen device columns
//! - Splitting, deduplicating and ordering semicolon-joined multi-value cells
//! - Configurable handling of blank fields (discard the row or substitute defaults)
//! - Exact form factor resolution with an optional fallback
//! - Row-level statistics with a frequency table of discard reasons
//!
//! ```rust
//! use device_catalog_parser::{ParserConfig, parse_device_catalog};
//!
//! let csv = "Brand,Device,Manufacturer,Model Name,RAM (TotalMem),Form Factor,System on Chip,GPU,Screen Sizes,Screen Densities,ABIs,Android SDK Versions,OpenGL ES Versions\n\
//!            google,coral,Google,Pixel 4 XL,5730MB,Phone,Qualcomm SDM855,Qualcomm Adreno 640 (585 MHz),1440x3040,560,arm64-v8a;armeabi;armeabi-v7a,33,3.2";
//!
//! let devices = parse_device_catalog(csv, &ParserConfig::default()).unwrap();
//! assert_eq!(devices.len(), 1);
//! assert_eq!(devices[0].abis, vec!["arm64-v8a", "armeabi", "armeabi-v7a"]);
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_parser;
        pub mod export;
        pub mod sanitizer;
        pub mod summary;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DeviceRecord, FormFactor};
pub use app::services::catalog_parser::{
    CatalogParser, ParseOutcome, parse_device_catalog, parse_device_catalog_with_stats,
};
pub use app::services::export::{devices_to_json, write_devices_json};
pub use app::services::sanitizer::sanitize_device_ram;
pub use config::{ParserConfig, ParserConfigBuilder};

/// Result type alias for the device catalog parser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for device catalog parsing operations
///
/// Only structural problems surface here. Data-quality problems inside a row
/// (blank fields, unknown form factors, malformed numeric tokens) are reported
/// through [`ParseOutcome`] instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV tokenizer error
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Input text cannot be split into rows and columns
    #[error("Malformed catalog input at line {line}: {message}")]
    MalformedInput { line: u64, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Form factor label not in the catalog's enumeration
    #[error("Unknown form factor: {value}")]
    UnknownFormFactor { value: String },

    /// JSON export error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
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

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed input error pointing at a line of the input text
    pub fn malformed_input(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unknown form factor error
    pub fn unknown_form_factor(value: impl Into<String>) -> Self {
        Self::UnknownFormFactor {
            value: value.into(),
        }
    }

    /// True for errors raised because the input could not be tokenized
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::CsvParsing { .. } | Self::MalformedInput { .. })
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

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
