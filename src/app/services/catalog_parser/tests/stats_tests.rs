//! Tests for parsing statistics functionality

use super::super::record_parser::DiscardReason;
use super::super::stats::ParseOutcome;
use super::create_test_device;
use std::collections::BTreeMap;

fn outcome_with_counts(successful: usize, discarded: usize) -> ParseOutcome {
    let mut outcome = ParseOutcome::new();
    for _ in 0..successful {
        outcome.record_device(create_test_device());
    }
    for _ in 0..discarded {
        outcome.record_discard(&DiscardReason::UnknownFormFactor("Toaster".to_string()));
    }
    outcome
}

#[test]
fn test_success_rate_empty() {
    let outcome = ParseOutcome::new();

    assert_eq!(outcome.total_rows, 0);
    assert_eq!(outcome.successful_count(), 0);
    assert_eq!(outcome.success_rate(), 0.0);
    assert!(outcome.is_complete());
}

#[test]
fn test_record_discard_counts_rows_and_reasons() {
    let mut outcome = ParseOutcome::new();

    outcome.record_discard(&DiscardReason::MissingFields(vec!["Brand", "Device", "GPU"]));
    outcome.record_discard(&DiscardReason::MissingFields(vec!["Brand"]));
    outcome.record_discard(&DiscardReason::UnknownFormFactor("Fridge".to_string()));

    assert_eq!(outcome.total_rows, 3);
    assert_eq!(outcome.discarded_count, 3);
    assert!(!outcome.is_complete());

    let expected: BTreeMap<String, usize> = [
        ("Missing required field: Brand", 2),
        ("Missing required field: Device", 1),
        ("Missing required field: GPU", 1),
        ("Unknown form factor: Fridge", 1),
    ]
    .into_iter()
    .map(|(reason, count)| (reason.to_string(), count))
    .collect();
    assert_eq!(outcome.discard_reasons, expected);
}

#[test]
fn test_top_discard_reasons_order() {
    let mut outcome = ParseOutcome::new();
    outcome.record_discard(&DiscardReason::MissingFields(vec!["GPU"]));
    outcome.record_discard(&DiscardReason::MissingFields(vec!["Brand", "GPU"]));
    outcome.record_discard(&DiscardReason::UnknownFormFactor("Fridge".to_string()));

    let top = outcome.top_discard_reasons(2);

    assert_eq!(
        top,
        vec![
            ("Missing required field: GPU", 2),
            ("Missing required field: Brand", 1),
        ]
    );
    assert_eq!(outcome.top_discard_reasons(10).len(), 3);
    assert!(outcome.top_discard_reasons(0).is_empty());
}

#[test]
fn test_success_rate_calculation() {
    let outcome = outcome_with_counts(2, 2);
    assert_eq!(outcome.total_rows, 4);
    assert_eq!(outcome.success_rate(), 50.0);

    let perfect = outcome_with_counts(5, 0);
    assert_eq!(perfect.success_rate(), 100.0);
    assert!(perfect.is_complete());

    let none = outcome_with_counts(0, 3);
    assert_eq!(none.success_rate(), 0.0);
}

#[test]
fn test_summary_line() {
    let outcome = outcome_with_counts(2, 1);

    assert_eq!(
        outcome.summary(),
        "Parsed 2 of 3 rows (66.67% success), 1 discarded"
    );
}

#[test]
fn test_serialization_uses_camel_case() {
    let mut outcome = ParseOutcome::new();
    outcome.record_discard(&DiscardReason::MissingFields(vec!["Brand"]));

    let json = serde_json::to_string(&outcome).unwrap();

    assert!(json.contains("\"totalRows\":1"));
    assert!(json.contains("\"discardedCount\":1"));
    assert!(json.contains("\"discardReasons\":{\"Missing required field: Brand\":1}"));
}
