//! Individual CSV record parsing for the device catalog
//!
//! Each row passes through three stages: required-field validation (or
//! default substitution), form factor resolution, and record assembly with
//! multi-value decomposition. The first two stages can reject the row.

use csv::StringRecord;
use std::borrow::Cow;
use std::fmt;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{get_field, split_int_values, split_string_values};
use crate::app::models::{DeviceRecord, FormFactor};
use crate::config::ParserConfig;
use crate::constants::{columns, missing_field_reason, unknown_form_factor_reason};

/// Why a row produced no record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardReason {
    /// One or more required fields were blank or absent, in catalog order
    MissingFields(Vec<&'static str>),

    /// The form factor label was not recognized and no fallback was configured
    UnknownFormFactor(String),
}

impl DiscardReason {
    /// Reason strings recorded in the statistics, one per cause
    pub fn reasons(&self) -> Vec<String> {
        match self {
            DiscardReason::MissingFields(labels) => labels
                .iter()
                .map(|label| missing_field_reason(label))
                .collect(),
            DiscardReason::UnknownFormFactor(raw) => vec![unknown_form_factor_reason(raw)],
        }
    }
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reasons().join("; "))
    }
}

/// Raw field values of a row after the required-field stage
///
/// Values borrow either the record or the configured default string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields<'a> {
    pub brand: Cow<'a, str>,
    pub device: Cow<'a, str>,
    pub manufacturer: Cow<'a, str>,
    pub model_name: Cow<'a, str>,
    pub ram: Cow<'a, str>,
    pub form_factor: Cow<'a, str>,
    pub processor_name: Cow<'a, str>,
    pub gpu: Cow<'a, str>,
    pub screen_sizes: Cow<'a, str>,
    pub screen_densities: Cow<'a, str>,
    pub abis: Cow<'a, str>,
    pub sdk_versions: Cow<'a, str>,
    pub open_gl_es_versions: Cow<'a, str>,
}

/// Parse a single device record from a CSV row
pub fn parse_device_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    config: &ParserConfig,
) -> Result<DeviceRecord, DiscardReason> {
    let fields = extract_required_fields(record, mapping, config)?;
    let form_factor = resolve_form_factor(&fields.form_factor, config)?;
    Ok(build_device_record(&fields, form_factor, config))
}

/// Look up all thirteen fields and apply the blank-field policy
///
/// Without default substitution every blank field is collected and the row
/// is rejected with all of them at once.
pub fn extract_required_fields<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    config: &'a ParserConfig,
) -> Result<RequiredFields<'a>, DiscardReason> {
    let default_value: &'a str = config.default_string_value.as_str();
    let mut missing = Vec::new();

    let mut take = |label: &'static str| -> Cow<'a, str> {
        match get_field(record, mapping, label) {
            Some(value) => Cow::Borrowed(value),
            None => {
                missing.push(label);
                Cow::Borrowed(default_value)
            }
        }
    };

    let fields = RequiredFields {
        brand: take(columns::BRAND),
        device: take(columns::DEVICE),
        manufacturer: take(columns::MANUFACTURER),
        model_name: take(columns::MODEL_NAME),
        ram: take(columns::RAM),
        form_factor: take(columns::FORM_FACTOR),
        processor_name: take(columns::SYSTEM_ON_CHIP),
        gpu: take(columns::GPU),
        screen_sizes: take(columns::SCREEN_SIZES),
        screen_densities: take(columns::SCREEN_DENSITIES),
        abis: take(columns::ABIS),
        sdk_versions: take(columns::SDK_VERSIONS),
        open_gl_es_versions: take(columns::OPENGL_ES_VERSIONS),
    };

    if !missing.is_empty() && !config.use_defaults_for_missing_fields {
        return Err(DiscardReason::MissingFields(missing));
    }

    Ok(fields)
}

/// Resolve a form factor label, falling back to the configured default
pub fn resolve_form_factor(
    raw_value: &str,
    config: &ParserConfig,
) -> Result<FormFactor, DiscardReason> {
    FormFactor::from_label_or_none(raw_value)
        .or(config.default_form_factor)
        .ok_or_else(|| DiscardReason::UnknownFormFactor(raw_value.to_string()))
}

/// Assemble the record, decomposing every multi-value field
pub fn build_device_record(
    fields: &RequiredFields<'_>,
    form_factor: FormFactor,
    config: &ParserConfig,
) -> DeviceRecord {
    DeviceRecord {
        brand: fields.brand.to_string(),
        device: fields.device.to_string(),
        manufacturer: fields.manufacturer.to_string(),
        model_name: fields.model_name.to_string(),
        ram: fields.ram.to_string(),
        form_factor,
        processor_name: fields.processor_name.to_string(),
        gpu: fields.gpu.to_string(),
        screen_sizes: split_string_values(&fields.screen_sizes),
        screen_densities: split_int_values(&fields.screen_densities, config),
        abis: split_string_values(&fields.abis),
        sdk_versions: split_int_values(&fields.sdk_versions, config),
        open_gl_es_versions: split_string_values(&fields.open_gl_es_versions),
    }
}
