//! Field lookup and multi-value decomposition for catalog records
//!
//! Lookups return raw cell text. Multi-value cells are split on the
//! catalog separator, deduplicated and sorted before they reach a record.

use super::column_mapping::ColumnMapping;
use crate::config::ParserConfig;
use crate::constants::MULTI_VALUE_SEPARATOR;
use csv::StringRecord;
use std::collections::BTreeSet;
use tracing::debug;

/// Check whether a cell counts as blank (empty or whitespace only)
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Get a non-blank field value from a CSV record
///
/// Returns `None` when the column is not in the header, the row is too
/// short to reach it, or the cell is blank. The value is returned untrimmed.
pub fn get_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<&'a str> {
    mapping
        .get_index(field_name)
        .and_then(|index| record.get(index))
        .filter(|value| !is_blank(value))
}

/// Split a multi-value cell into distinct tokens in lexicographic order
pub fn split_string_values(value: &str) -> Vec<String> {
    value
        .split(MULTI_VALUE_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Split a multi-value cell into distinct integers in ascending order
///
/// A token that is not a valid `i32` becomes `default_int_value` when default
/// substitution is enabled and is dropped otherwise. Tokens are not trimmed.
pub fn split_int_values(value: &str, config: &ParserConfig) -> Vec<i32> {
    let mut values = BTreeSet::new();

    for token in value
        .split(MULTI_VALUE_SEPARATOR)
        .filter(|token| !token.is_empty())
    {
        match token.parse::<i32>() {
            Ok(number) => {
                values.insert(number);
            }
            Err(_) if config.use_defaults_for_missing_fields => {
                debug!(
                    "Substituted {} for non-numeric token '{}'",
                    config.default_int_value, token
                );
                values.insert(config.default_int_value);
            }
            Err(_) => {
                debug!("Dropped non-numeric token '{}'", token);
            }
        }
    }

    values.into_iter().collect()
}
