//! Column mapping for the catalog header row
//!
//! Header labels are matched exactly. A label that differs in case or
//! surrounding whitespace is treated as an unrelated column.

use crate::constants::{columns, is_device_column};
use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping for the catalog header
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    /// Column label to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Build the mapping from a header record
    ///
    /// When a label appears more than once the first occurrence wins.
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            name_to_index.entry(header.to_string()).or_insert(index);
        }

        ColumnMapping { name_to_index }
    }

    /// Get the index for a given column label
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Device columns present in the header, in catalog order
    pub fn recognized_columns(&self) -> Vec<&'static str> {
        columns::ALL
            .iter()
            .copied()
            .filter(|label| self.has_column(label))
            .collect()
    }

    /// Device columns absent from the header, in catalog order
    pub fn missing_columns(&self) -> Vec<&'static str> {
        columns::ALL
            .iter()
            .copied()
            .filter(|label| !self.has_column(label))
            .collect()
    }

    /// Number of header columns that are not part of the device schema
    pub fn extra_column_count(&self) -> usize {
        self.name_to_index
            .keys()
            .filter(|label| !is_device_column(label))
            .count()
    }
}
