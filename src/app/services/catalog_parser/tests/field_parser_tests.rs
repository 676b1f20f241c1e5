//! Tests for field lookup, header mapping and multi-value decomposition

use super::*;
use crate::app::services::catalog_parser::field_parsers::{
    get_field, is_blank, split_int_values, split_string_values,
};
use crate::config::ParserConfig;
use crate::constants::columns;

#[test]
fn test_column_mapping_exact_labels() {
    let mapping = create_test_mapping();

    assert_eq!(mapping.get_index(columns::BRAND), Some(0));
    assert_eq!(mapping.get_index(columns::OPENGL_ES_VERSIONS), Some(12));
    assert!(mapping.has_column("Install base"));
    assert!(!mapping.has_column("brand"));
    assert!(mapping.missing_columns().is_empty());
    assert_eq!(mapping.recognized_columns().len(), 13);
    assert_eq!(mapping.extra_column_count(), 3);
}

#[test]
fn test_column_mapping_without_expected_labels() {
    let mapping = ColumnMapping::analyze(&create_record(PIXEL_4_XL_ROW));

    assert!(mapping.recognized_columns().is_empty());
    assert_eq!(mapping.missing_columns().len(), 13);
}

#[test]
fn test_column_mapping_first_duplicate_wins() {
    let mapping = ColumnMapping::analyze(&create_record("Brand,Brand,Device"));

    assert_eq!(mapping.get_index("Brand"), Some(0));
    assert_eq!(mapping.get_index("Device"), Some(2));
}

#[test]
fn test_column_mapping_does_not_trim_labels() {
    let mapping = ColumnMapping::analyze(&create_record(" Brand,Device "));

    assert!(!mapping.has_column("Brand"));
    assert!(!mapping.has_column("Device"));
}

#[test]
fn test_get_field() {
    let mapping = create_test_mapping();
    let record = create_record("google,  ,,Pixel 4 XL");

    assert_eq!(get_field(&record, &mapping, columns::BRAND), Some("google"));
    assert_eq!(get_field(&record, &mapping, columns::DEVICE), None);
    assert_eq!(get_field(&record, &mapping, columns::MANUFACTURER), None);
    assert_eq!(
        get_field(&record, &mapping, columns::MODEL_NAME),
        Some("Pixel 4 XL")
    );
    // Row is too short to reach these columns
    assert_eq!(get_field(&record, &mapping, columns::GPU), None);
    // Column not in the header
    assert_eq!(get_field(&record, &mapping, "Chipset"), None);
}

#[test]
fn test_is_blank() {
    assert!(is_blank(""));
    assert!(is_blank("   "));
    assert!(is_blank("\t"));
    assert!(!is_blank(" x "));
}

#[test]
fn test_split_string_values() {
    assert_eq!(split_string_values("3.1;3.2;3.1"), vec!["3.1", "3.2"]);
    assert_eq!(
        split_string_values("armeabi-v7a;;arm64-v8a;"),
        vec!["arm64-v8a", "armeabi-v7a"]
    );
    assert_eq!(split_string_values("single"), vec!["single"]);
    assert!(split_string_values("").is_empty());
    assert!(split_string_values(";;").is_empty());
}

#[test]
fn test_split_string_values_sorts_as_text() {
    assert_eq!(
        split_string_values("720x1280;1080x1920"),
        vec!["1080x1920", "720x1280"]
    );
}

#[test]
fn test_split_int_values_drops_bad_tokens_without_defaults() {
    let config = ParserConfig::default();

    assert_eq!(split_int_values("28;26;28", &config), vec![26, 28]);
    assert_eq!(split_int_values("33;abc;31", &config), vec![31, 33]);
    assert_eq!(split_int_values(" 33", &config), Vec::<i32>::new());
    assert_eq!(split_int_values("99999999999", &config), Vec::<i32>::new());
    assert_eq!(split_int_values("-5;;10", &config), vec![-5, 10]);
}

#[test]
fn test_split_int_values_substitutes_with_defaults() {
    let config = ParserConfig::builder()
        .use_defaults_for_missing_fields(true)
        .default_int_value(-1)
        .build();

    assert_eq!(split_int_values("33;abc;31", &config), vec![-1, 31, 33]);
    assert_eq!(split_int_values("abc;def", &config), vec![-1]);
    assert!(split_int_values("", &config).is_empty());
}
