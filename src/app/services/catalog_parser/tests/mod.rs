//! Test utilities for catalog parser testing
//!
//! This module provides the catalog header, sample rows and helper functions
//! used across the parser test modules.

use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use crate::app::models::{DeviceRecord, FormFactor};

// Test modules
mod field_parser_tests;
mod stats_tests;

/// Catalog header as exported, including the trailing quality columns
pub const CATALOG_HEADER: &str = "Brand,Device,Manufacturer,Model Name,RAM (TotalMem),Form Factor,System on Chip,GPU,Screen Sizes,Screen Densities,ABIs,Android SDK Versions,OpenGL ES Versions,Install base,User-perceived ANR rate,User-perceived crash rate";

pub const PIXEL_4_XL_ROW: &str = "google,coral,Google,Pixel 4 XL,5730MB,Phone,Qualcomm SDM855,Qualcomm Adreno 640 (585 MHz),1440x3040,560,arm64-v8a;armeabi;armeabi-v7a,33,3.2,0,0.00%,0.00%";

pub const GALAXY_TAB_ROW: &str = "samsung,tab1,Samsung,Galaxy Tab S7,8192MB,Tablet,Qualcomm SDM865+,Qualcomm Adreno 650,2560x1600,287,arm64-v8a,30,3.2,0,0.00%,0.00%";

pub const GALAXY_TAB_MISSING_BRAND_DEVICE_ROW: &str = ",,Samsung,Galaxy Tab S7,8192MB,Tablet,Qualcomm SDM865+,Qualcomm Adreno 650,2560x1600,287,arm64-v8a,30,3.2,0,0.00%,0.00%";

pub const UNKNOWN_FORM_FACTOR_ROW: &str = "unknown,device1,Unknown,Device 1,1024MB,UnknownFormFactor,Unknown Chip,Unknown GPU,1920x1080,160,arm64-v8a,28,3.2,0,0.00%,0.00%";

/// Helper to build catalog text from the standard header and given rows
pub fn create_catalog_csv(rows: &[&str]) -> String {
    let mut lines = vec![CATALOG_HEADER];
    lines.extend_from_slice(rows);
    lines.join("\n")
}

/// Helper to build a header mapping from the standard header
pub fn create_test_mapping() -> ColumnMapping {
    ColumnMapping::analyze(&create_record(CATALOG_HEADER))
}

/// Helper to turn a single CSV line into a record
pub fn create_record(line: &str) -> StringRecord {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    reader
        .records()
        .next()
        .expect("line should contain one record")
        .expect("line should be valid CSV")
}

/// Helper to create a complete device record
pub fn create_test_device() -> DeviceRecord {
    DeviceRecord {
        brand: "google".to_string(),
        device: "coral".to_string(),
        manufacturer: "Google".to_string(),
        model_name: "Pixel 4 XL".to_string(),
        ram: "5730MB".to_string(),
        form_factor: FormFactor::Phone,
        processor_name: "Qualcomm SDM855".to_string(),
        gpu: "Qualcomm Adreno 640 (585 MHz)".to_string(),
        screen_sizes: vec!["1440x3040".to_string()],
        screen_densities: vec![560],
        abis: vec![
            "arm64-v8a".to_string(),
            "armeabi".to_string(),
            "armeabi-v7a".to_string(),
        ],
        sdk_versions: vec![33],
        open_gl_es_versions: vec!["3.2".to_string()],
    }
}
