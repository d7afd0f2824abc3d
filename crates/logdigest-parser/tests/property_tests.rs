// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for logdigest-parser
//!
//! These tests use proptest to verify extraction invariants hold for
//! arbitrary counts, durations and identifiers, and that no input makes a
//! parser panic.

use logdigest_parser::{
    LineScanParser, LogParser, ParseStrategy, ResilientParser, SummaryLineParser,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Test identifiers of the form `path/to/test_file.py::test_name`
fn test_id() -> impl Strategy<Value = String> {
    ("[a-z_]{1,8}(/[a-z_]{1,8}){0,2}", "[a-z_][a-z0-9_]{0,15}")
        .prop_map(|(path, name)| format!("{path}.py::{name}"))
}

/// Durations as pytest prints them: always with a decimal point
fn duration_text() -> impl Strategy<Value = (String, f64)> {
    (0u32..10_000, 0u32..1000).prop_map(|(whole, frac)| {
        let text = format!("{whole}.{frac:03}");
        let value: f64 = text.parse().expect("formatted duration parses");
        (text, value)
    })
}

fn phase() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("call"), Just("setup"), Just("teardown")]
}

// ============================================================================
// Summary line properties
// ============================================================================

proptest! {
    #[test]
    fn prop_summary_line_counts(passed in 0usize..10_000, failed in 0usize..10_000, (secs, value) in duration_text()) {
        let log = format!("==== {passed} passed, {failed} failed in {secs}s ====");
        let summary = SummaryLineParser.parse(&log);

        prop_assert_eq!(summary.passed, passed);
        prop_assert_eq!(summary.failed, failed);
        prop_assert_eq!(summary.total, passed + failed);
        prop_assert_eq!(summary.duration, Some(value));
    }

    #[test]
    fn prop_total_is_sum_of_tallies(text in ".{0,400}") {
        for strategy in [ParseStrategy::Auto, ParseStrategy::Summary, ParseStrategy::LineScan] {
            let summary = strategy.parser().parse(&text);
            prop_assert_eq!(
                summary.total,
                summary.passed + summary.failed + summary.skipped + summary.errors
            );
            prop_assert_eq!(&summary.raw_text, &text);
        }
    }

    #[test]
    fn prop_durations_are_non_negative(text in "([0-9. a-z:_/]{0,40}\n){0,10}") {
        let summary = ResilientParser.parse(&text);
        prop_assert!(summary.per_test.values().all(|secs| *secs >= 0.0));
        prop_assert!(summary.duration.is_none_or(|secs| secs >= 0.0));
    }
}

// ============================================================================
// Per-test duration properties
// ============================================================================

proptest! {
    #[test]
    fn prop_both_duration_shapes_populate_per_test(
        id in test_id(),
        (secs, value) in duration_text(),
        phase_word in phase(),
    ) {
        let duration_first = format!("{secs}s {phase_word}     {id}");
        let id_first = format!("{id} {secs}s");

        for line in [duration_first, id_first] {
            let summary = SummaryLineParser.parse(&line);
            prop_assert_eq!(summary.per_test.get(&id).copied(), Some(value));
            let scanned = LineScanParser.parse(&line);
            prop_assert_eq!(scanned.per_test.get(&id).copied(), Some(value));
        }
    }

    #[test]
    fn prop_later_line_wins(
        id in test_id(),
        (first, _) in duration_text(),
        (second, second_value) in duration_text(),
        id_first_last in any::<bool>(),
    ) {
        let log = if id_first_last {
            format!("{first}s call {id}\n{id} {second}s\n")
        } else {
            format!("{id} {first}s\n{second}s call {id}\n")
        };
        let summary = SummaryLineParser.parse(&log);
        prop_assert_eq!(summary.per_test.len(), 1);
        prop_assert_eq!(summary.per_test.get(&id).copied(), Some(second_value));
    }

    #[test]
    fn prop_integer_durations_not_recognized(id in test_id(), secs in 0u32..1000) {
        let log = format!("{secs}s call {id}\n{id} {secs}s\n");
        let summary = SummaryLineParser.parse(&log);
        prop_assert!(summary.per_test.is_empty());
    }
}
