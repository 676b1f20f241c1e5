//! Opt-in clean-up helpers for catalog values
//!
//! The parser stores values exactly as published. These helpers normalize
//! them afterwards when a caller wants simpler values.

use crate::constants::RAM_SUFFIX_MB;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Reduce a RAM range to its maximum value
///
/// "3705-3735MB" becomes "3735MB". Values without an "MB" suffix, or without
/// any digits, are returned unchanged.
pub fn sanitize_device_ram(ram: &str) -> String {
    if !ram.contains(RAM_SUFFIX_MB) {
        return ram.to_string();
    }

    match extract_numbers(ram).into_iter().max() {
        Some(max_value) => format!("{}{}", max_value, RAM_SUFFIX_MB),
        None => ram.to_string(),
    }
}

/// Extract every run of digits, in order of appearance
///
/// Runs too large for a `u64` are skipped.
pub fn extract_numbers(input: &str) -> Vec<u64> {
    NUMBER_PATTERN
        .find_iter(input)
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .collect()
}
