//! Catalog-wide aggregates over parsed devices
//!
//! Used by the `stats --summary` command to describe what a catalog export
//! contains once invalid rows have been removed.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::app::models::{DeviceRecord, FormFactor};

/// Aggregate view of a set of parsed devices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    /// Number of devices summarized
    pub total_devices: usize,

    /// Devices per form factor, only for form factors that occur
    pub form_factor_distribution: BTreeMap<FormFactor, usize>,

    pub unique_manufacturers: usize,
    pub unique_processors: usize,
    pub unique_gpus: usize,
    pub unique_screen_sizes: usize,
    pub unique_screen_densities: usize,
    pub unique_abis: usize,
    pub unique_sdk_versions: usize,
    pub unique_open_gl_es_versions: usize,

    /// Lowest and highest SDK level across all devices
    pub sdk_version_range: Option<(i32, i32)>,

    /// Lowest and highest screen density across all devices
    pub screen_density_range: Option<(i32, i32)>,
}

impl CatalogSummary {
    /// Build a summary from parsed devices
    pub fn from_devices(devices: &[DeviceRecord]) -> Self {
        let mut form_factor_distribution = BTreeMap::new();
        let mut manufacturers = BTreeSet::new();
        let mut processors = BTreeSet::new();
        let mut gpus = BTreeSet::new();
        let mut screen_sizes = BTreeSet::new();
        let mut screen_densities = BTreeSet::new();
        let mut abis = BTreeSet::new();
        let mut sdk_versions = BTreeSet::new();
        let mut open_gl_es_versions = BTreeSet::new();

        for device in devices {
            *form_factor_distribution
                .entry(device.form_factor)
                .or_insert(0) += 1;
            manufacturers.insert(device.manufacturer.as_str());
            processors.insert(device.processor_name.as_str());
            gpus.insert(device.gpu.as_str());
            screen_sizes.extend(device.screen_sizes.iter().map(String::as_str));
            screen_densities.extend(device.screen_densities.iter().copied());
            abis.extend(device.abis.iter().map(String::as_str));
            sdk_versions.extend(device.sdk_versions.iter().copied());
            open_gl_es_versions.extend(device.open_gl_es_versions.iter().map(String::as_str));
        }

        Self {
            total_devices: devices.len(),
            form_factor_distribution,
            unique_manufacturers: manufacturers.len(),
            unique_processors: processors.len(),
            unique_gpus: gpus.len(),
            unique_screen_sizes: screen_sizes.len(),
            unique_screen_densities: screen_densities.len(),
            unique_abis: abis.len(),
            unique_sdk_versions: sdk_versions.len(),
            unique_open_gl_es_versions: open_gl_es_versions.len(),
            sdk_version_range: range_of(&sdk_versions),
            screen_density_range: range_of(&screen_densities),
        }
    }

    /// Share of devices with the given form factor, as a percentage
    pub fn form_factor_share(&self, form_factor: FormFactor) -> f64 {
        if self.total_devices == 0 {
            return 0.0;
        }
        let count = self
            .form_factor_distribution
            .get(&form_factor)
            .copied()
            .unwrap_or(0);
        (count as f64 / self.total_devices as f64) * 100.0
    }
}

fn range_of(values: &BTreeSet<i32>) -> Option<(i32, i32)> {
    Some((*values.first()?, *values.last()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParserConfig, parse_device_catalog};

    const CATALOG: &str = "Brand,Device,Manufacturer,Model Name,RAM (TotalMem),Form Factor,System on Chip,GPU,Screen Sizes,Screen Densities,ABIs,Android SDK Versions,OpenGL ES Versions
google,coral,Google,Pixel 4 XL,5730MB,Phone,Qualcomm SDM855,Qualcomm Adreno 640 (585 MHz),1440x3040,560,arm64-v8a;armeabi;armeabi-v7a,33,3.2
google,taimen,Google,Pixel 2 XL,3839-4508MB,Phone,Qualcomm MSM8998,Qualcomm Adreno 540 (650 MHz),1440x2880;900x1920,240;560,arm64-v8a;armeabi;armeabi-v7a,28;30,3.2
samsung,tab1,Samsung,Galaxy Tab S7,8192MB,Tablet,Qualcomm SDM865+,Qualcomm Adreno 650,2560x1600,287,arm64-v8a,30,3.1;3.2";

    #[test]
    fn test_summary_counts() {
        let devices = parse_device_catalog(CATALOG, &ParserConfig::default()).unwrap();
        let summary = CatalogSummary::from_devices(&devices);

        assert_eq!(summary.total_devices, 3);
        assert_eq!(summary.form_factor_distribution[&FormFactor::Phone], 2);
        assert_eq!(summary.form_factor_distribution[&FormFactor::Tablet], 1);
        assert!(!summary.form_factor_distribution.contains_key(&FormFactor::Tv));
        assert_eq!(summary.unique_manufacturers, 2);
        assert_eq!(summary.unique_processors, 3);
        assert_eq!(summary.unique_gpus, 3);
        assert_eq!(summary.unique_screen_sizes, 4);
        assert_eq!(summary.unique_screen_densities, 3);
        assert_eq!(summary.unique_abis, 3);
        assert_eq!(summary.unique_sdk_versions, 3);
        assert_eq!(summary.unique_open_gl_es_versions, 2);
        assert_eq!(summary.sdk_version_range, Some((28, 33)));
        assert_eq!(summary.screen_density_range, Some((240, 560)));
    }

    #[test]
    fn test_form_factor_share() {
        let devices = parse_device_catalog(CATALOG, &ParserConfig::default()).unwrap();
        let summary = CatalogSummary::from_devices(&devices);

        assert!((summary.form_factor_share(FormFactor::Phone) - 66.67).abs() < 0.01);
        assert_eq!(summary.form_factor_share(FormFactor::Wearable), 0.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = CatalogSummary::from_devices(&[]);

        assert_eq!(summary.total_devices, 0);
        assert!(summary.form_factor_distribution.is_empty());
        assert_eq!(summary.sdk_version_range, None);
        assert_eq!(summary.form_factor_share(FormFactor::Phone), 0.0);
    }

    #[test]
    fn test_summary_serializes_form_factor_labels() {
        let devices = parse_device_catalog(CATALOG, &ParserConfig::default()).unwrap();
        let json = serde_json::to_string(&CatalogSummary::from_devices(&devices)).unwrap();

        assert!(json.contains("\"formFactorDistribution\":{\"Phone\":2,\"Tablet\":1}"));
    }
}
