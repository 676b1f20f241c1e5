//! Data models for device catalog processing
//!
//! This module contains the core data structures produced by the catalog
//! parser: the validated [`DeviceRecord`] and the closed [`FormFactor`]
//! enumeration used by the catalog's "Form Factor" column.

use crate::app::services::sanitizer::sanitize_device_ram;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

// =============================================================================
// Device Record Structure
// =============================================================================

/// A validated device entry from the Google Play Device Catalog
///
/// Every multi-value field is deduplicated and sorted before it is stored:
/// string lists lexicographically on the raw token, integer lists numerically.
/// Screen sizes are therefore ordered as text ("1080x1920" sorts before
/// "720x1280"), which is the order consumers of the catalog rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    /// Brand of the device (e.g., "google")
    pub brand: String,

    /// Device identifier (e.g., "coral")
    pub device: String,

    /// Manufacturer (e.g., "Google")
    pub manufacturer: String,

    /// Marketing model name (e.g., "Pixel 4 XL")
    pub model_name: String,

    /// Total memory as published, either a single value or a range
    /// (e.g., "5730MB", "3705-3735MB")
    pub ram: String,

    /// Resolved device class
    pub form_factor: FormFactor,

    /// System on chip (e.g., "Qualcomm SDM855")
    pub processor_name: String,

    /// GPU description (e.g., "Qualcomm Adreno 640 (585 MHz)")
    pub gpu: String,

    /// Supported screen resolutions formatted "WIDTHxHEIGHT"
    pub screen_sizes: Vec<String>,

    /// Supported screen densities in dpi
    pub screen_densities: Vec<i32>,

    /// Supported ABIs (e.g., "arm64-v8a")
    pub abis: Vec<String>,

    /// Supported Android SDK API levels
    pub sdk_versions: Vec<i32>,

    /// Supported OpenGL ES versions (e.g., "3.2")
    pub open_gl_es_versions: Vec<String>,
}

impl DeviceRecord {
    /// Return a copy of this record with the RAM range reduced to its maximum
    ///
    /// "3705-3735MB" becomes "3735MB". Values without an "MB" suffix are kept.
    pub fn with_sanitized_ram(mut self) -> Self {
        self.ram = sanitize_device_ram(&self.ram);
        self
    }

    /// Check whether the device supports a given SDK API level
    pub fn supports_sdk(&self, api_level: i32) -> bool {
        self.sdk_versions.binary_search(&api_level).is_ok()
    }

    /// Check whether the device supports a given ABI
    pub fn supports_abi(&self, abi: &str) -> bool {
        self.abis.iter().any(|a| a == abi)
    }

    /// Highest supported SDK API level, if any
    pub fn max_sdk_version(&self) -> Option<i32> {
        self.sdk_versions.last().copied()
    }
}

// =============================================================================
// Form Factor
// =============================================================================

/// Device class as published in the catalog's "Form Factor" column
///
/// Labels are matched exactly and case-sensitively: "phone" is not a phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum FormFactor {
    /// Smartphones and mobile phones
    Phone,

    /// Tablet devices with larger screens
    Tablet,

    /// Television and Android TV devices
    Tv,

    /// Smartwatches and other wearable devices
    Wearable,

    /// In-vehicle Android Automotive systems
    AndroidAutomotive,

    /// Chromebook devices running Android apps
    Chromebook,

    /// PC platform for Android games
    GooglePlayGamesOnPc,

    /// Sentinel for unrecognized devices, only produced when configured as the
    /// fallback form factor
    Unknown,
}

/// Label to variant table, built once on first lookup
static FORM_FACTOR_BY_LABEL: Lazy<HashMap<&'static str, FormFactor>> = Lazy::new(|| {
    FormFactor::ALL
        .iter()
        .map(|form_factor| (form_factor.label(), *form_factor))
        .collect()
});

impl FormFactor {
    /// Every form factor, in catalog order
    pub const ALL: [FormFactor; 8] = [
        FormFactor::Phone,
        FormFactor::Tablet,
        FormFactor::Tv,
        FormFactor::Wearable,
        FormFactor::AndroidAutomotive,
        FormFactor::Chromebook,
        FormFactor::GooglePlayGamesOnPc,
        FormFactor::Unknown,
    ];

    /// Label as it appears in the catalog CSV
    pub fn label(self) -> &'static str {
        match self {
            FormFactor::Phone => "Phone",
            FormFactor::Tablet => "Tablet",
            FormFactor::Tv => "TV",
            FormFactor::Wearable => "Wearable",
            FormFactor::AndroidAutomotive => "Android Automotive",
            FormFactor::Chromebook => "Chromebook",
            FormFactor::GooglePlayGamesOnPc => "Google Play Games on PC",
            FormFactor::Unknown => "Unknown",
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            FormFactor::Phone => "Smartphones and mobile phones",
            FormFactor::Tablet => "Tablet devices with larger screens",
            FormFactor::Tv => "Television and Android TV devices",
            FormFactor::Wearable => "Smartwatches and other wearable devices",
            FormFactor::AndroidAutomotive => "In-vehicle Android Automotive systems",
            FormFactor::Chromebook => "Chromebook devices running Android apps",
            FormFactor::GooglePlayGamesOnPc => "PC platform for Android games",
            FormFactor::Unknown => "Unknown or unrecognized form factor",
        }
    }

    /// Resolve a catalog label, failing on anything outside the enumeration
    pub fn from_label(value: &str) -> Result<Self> {
        Self::from_label_or_none(value).ok_or_else(|| Error::unknown_form_factor(value))
    }

    /// Resolve a catalog label, returning `None` when it is not recognized
    pub fn from_label_or_none(value: &str) -> Option<Self> {
        FORM_FACTOR_BY_LABEL.get(value).copied()
    }

    /// All catalog labels, in catalog order
    pub fn all_labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|form_factor| form_factor.label()).collect()
    }
}

impl FromStr for FormFactor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl TryFrom<String> for FormFactor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_label(&value)
    }
}

impl From<FormFactor> for &'static str {
    fn from(form_factor: FormFactor) -> Self {
        form_factor.label()
    }
}

impl std::fmt::Display for FormFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
