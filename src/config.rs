//! Parser configuration and validation policy.
//!
//! Controls how the catalog parser treats rows with blank fields or
//! unrecognized form factors. The default configuration discards such rows;
//! callers can opt into substituting defaults instead.

use crate::app::models::FormFactor;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Validation policy consulted by the parser at every field site
///
/// Instances are immutable once built and can be shared freely between
/// threads and parse calls.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserConfig {
    /// Substitute defaults for blank fields instead of discarding the row
    pub use_defaults_for_missing_fields: bool,

    /// Replacement for blank fields when substitution is enabled
    pub default_string_value: String,

    /// Replacement for unparseable integer tokens when substitution is enabled
    pub default_int_value: i32,

    /// Replacement for unrecognized form factors. When absent, such rows are
    /// discarded regardless of `use_defaults_for_missing_fields`.
    pub default_form_factor: Option<FormFactor>,
}

impl ParserConfig {
    /// Start a fluent builder
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Enable or disable default substitution for blank fields
    pub fn with_defaults_for_missing_fields(mut self, enabled: bool) -> Self {
        self.use_defaults_for_missing_fields = enabled;
        self
    }

    /// Set the default string value
    pub fn with_default_string_value(mut self, value: impl Into<String>) -> Self {
        self.default_string_value = value.into();
        self
    }

    /// Set the default integer value
    pub fn with_default_int_value(mut self, value: i32) -> Self {
        self.default_int_value = value;
        self
    }

    /// Set the fallback form factor
    pub fn with_default_form_factor(mut self, form_factor: FormFactor) -> Self {
        self.default_form_factor = Some(form_factor);
        self
    }

    /// Parse a configuration from JSON text
    ///
    /// Missing keys take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("Invalid parser configuration: {}", e)))
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let config = Self::from_json_str(&content)?;
        debug!("Loaded parser configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// Fluent builder for [`ParserConfig`]
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    /// Use default values instead of discarding rows with blank fields
    pub fn use_defaults_for_missing_fields(mut self, enabled: bool) -> Self {
        self.config.use_defaults_for_missing_fields = enabled;
        self
    }

    /// Default value for blank fields (e.g., "Unknown", "N/A", "")
    pub fn default_string_value(mut self, value: impl Into<String>) -> Self {
        self.config.default_string_value = value.into();
        self
    }

    /// Default value for integer tokens that fail to parse
    pub fn default_int_value(mut self, value: i32) -> Self {
        self.config.default_int_value = value;
        self
    }

    /// Form factor used when the catalog label is not recognized
    pub fn default_form_factor(mut self, form_factor: FormFactor) -> Self {
        self.config.default_form_factor = Some(form_factor);
        self
    }

    /// Finish building
    pub fn build(self) -> ParserConfig {
        self.config
    }
}
