//! Parsing statistics and result structures for catalog processing
//!
//! This module provides the [`ParseOutcome`] returned by
//! `parse_with_stats`: accepted devices, row counts and a frequency table
//! of discard reasons.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::record_parser::DiscardReason;
use crate::app::models::DeviceRecord;

/// Parsing result with devices and row statistics
///
/// `total_rows` always equals `successful_count() + discarded_count`.
/// Reason counts can exceed `discarded_count` because a row missing several
/// fields contributes one reason per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    /// Successfully parsed devices, in input order
    pub devices: Vec<DeviceRecord>,

    /// Number of data rows encountered (header excluded)
    pub total_rows: usize,

    /// Number of rows that produced no device
    pub discarded_count: usize,

    /// Discard reason to number of occurrences
    pub discard_reasons: BTreeMap<String, usize>,
}

impl ParseOutcome {
    /// Create an empty outcome
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted row
    pub fn record_device(&mut self, device: DeviceRecord) {
        self.total_rows += 1;
        self.devices.push(device);
    }

    /// Record a discarded row and tally each of its reasons
    pub fn record_discard(&mut self, reason: &DiscardReason) {
        self.total_rows += 1;
        self.discarded_count += 1;
        for reason in reason.reasons() {
            *self.discard_reasons.entry(reason).or_insert(0) += 1;
        }
    }

    /// Number of devices successfully parsed
    pub fn successful_count(&self) -> usize {
        self.devices.len()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.successful_count() as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check whether every row produced a device
    pub fn is_complete(&self) -> bool {
        self.discarded_count == 0
    }

    /// Most frequent discard reasons, by count descending then reason text
    pub fn top_discard_reasons(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut reasons: Vec<(&str, usize)> = self
            .discard_reasons
            .iter()
            .map(|(reason, count)| (reason.as_str(), *count))
            .collect();

        reasons.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        reasons.truncate(limit);
        reasons
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} of {} rows ({:.2}% success), {} discarded",
            self.successful_count(),
            self.total_rows,
            self.success_rate(),
            self.discarded_count
        )
    }
}
