//! Application constants for the device catalog parser
//!
//! This module is the schema registry for the Google Play Device Catalog CSV
//! export: the exact header labels used to locate each field, the separator
//! used inside multi-value cells, and the text used in discard reasons.
//!
//! Current headers and sample data (as of Aug 2025):
//!
//! ```text
//! Brand,Device,Manufacturer,Model Name,RAM (TotalMem),Form Factor,System on Chip,GPU,Screen Sizes,Screen Densities,ABIs,Android SDK Versions,OpenGL ES Versions
//! google,coral,Google,Pixel 4 XL,5730MB,Phone,Qualcomm SDM855,Qualcomm Adreno 640 (585 MHz),1440x3040,560,arm64-v8a;armeabi;armeabi-v7a,33,3.2
//! google,taimen,Google,Pixel 2 XL,3839-4508MB,Phone,Qualcomm MSM8998,Qualcomm Adreno 540 (650 MHz),1440x2880;900x1920,240;560,arm64-v8a;armeabi;armeabi-v7a,28;30,3.2
//! ```

// =============================================================================
// Column Name Constants
// =============================================================================

/// Header labels in the device catalog export
pub mod columns {
    /// Brand of the device, e.g. "google"
    pub const BRAND: &str = "Brand";

    /// Device identifier, e.g. "coral"
    pub const DEVICE: &str = "Device";

    /// Manufacturer, e.g. "Google"
    pub const MANUFACTURER: &str = "Manufacturer";

    /// Marketing model name, e.g. "Pixel 4 XL"
    pub const MODEL_NAME: &str = "Model Name";

    /// Total memory, e.g. "5730MB" or "3705-3735MB"
    pub const RAM: &str = "RAM (TotalMem)";

    /// Form factor, e.g. "Phone"
    pub const FORM_FACTOR: &str = "Form Factor";

    /// System on chip, e.g. "Qualcomm SDM855"
    pub const SYSTEM_ON_CHIP: &str = "System on Chip";

    /// GPU, e.g. "Qualcomm Adreno 640 (585 MHz)"
    pub const GPU: &str = "GPU";

    /// Screen sizes, e.g. "1440x2880;900x1920"
    pub const SCREEN_SIZES: &str = "Screen Sizes";

    /// Screen densities, e.g. "240;560"
    pub const SCREEN_DENSITIES: &str = "Screen Densities";

    /// ABIs, e.g. "arm64-v8a;armeabi;armeabi-v7a"
    pub const ABIS: &str = "ABIs";

    /// Android SDK versions, e.g. "33;34;35"
    pub const SDK_VERSIONS: &str = "Android SDK Versions";

    /// OpenGL ES versions, e.g. "3.1;3.2"
    pub const OPENGL_ES_VERSIONS: &str = "OpenGL ES Versions";

    /// All device columns in catalog order
    pub const ALL: &[&str] = &[
        BRAND,
        DEVICE,
        MANUFACTURER,
        MODEL_NAME,
        RAM,
        FORM_FACTOR,
        SYSTEM_ON_CHIP,
        GPU,
        SCREEN_SIZES,
        SCREEN_DENSITIES,
        ABIS,
        SDK_VERSIONS,
        OPENGL_ES_VERSIONS,
    ];
}

/// Separator between values inside a multi-value cell
pub const MULTI_VALUE_SEPARATOR: char = ';';

/// Field delimiter of the catalog export
pub const FIELD_DELIMITER: u8 = b',';

// =============================================================================
// Discard Reasons
// =============================================================================

/// Prefix of the reason recorded for each blank required field
pub const MISSING_FIELD_REASON_PREFIX: &str = "Missing required field: ";

/// Prefix of the reason recorded when a form factor cannot be resolved
pub const UNKNOWN_FORM_FACTOR_REASON_PREFIX: &str = "Unknown form factor: ";

/// Number of discard reasons shown in reports
pub const DEFAULT_TOP_REASONS: usize = 10;

// =============================================================================
// Sanitizer Constants
// =============================================================================

/// Unit suffix used by the catalog's RAM column
pub const RAM_SUFFIX_MB: &str = "MB";

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a header label belongs to the device schema
pub fn is_device_column(label: &str) -> bool {
    columns::ALL.contains(&label)
}

/// Build the discard reason for a blank required field
pub fn missing_field_reason(label: &str) -> String {
    format!("{}{}", MISSING_FIELD_REASON_PREFIX, label)
}

/// Build the discard reason for an unresolved form factor
pub fn unknown_form_factor_reason(raw_value: &str) -> String {
    format!("{}{}", UNKNOWN_FORM_FACTOR_REASON_PREFIX, raw_value)
}
