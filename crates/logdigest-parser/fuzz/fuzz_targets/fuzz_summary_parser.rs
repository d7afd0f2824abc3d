// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for summary line parsing
//!
//! This fuzzes `SummaryLineParser`, which reads the pytest summary line and
//! per-test duration lines from arbitrary text.

#![no_main]

use libfuzzer_sys::fuzz_target;

use logdigest_parser::{LogParser, SummaryLineParser};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let summary = SummaryLineParser.parse(&input);
    assert_eq!(
        summary.total,
        summary.passed + summary.failed + summary.skipped + summary.errors
    );
});
