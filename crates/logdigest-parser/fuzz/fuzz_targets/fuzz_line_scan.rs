// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for line-by-line log scanning
//!
//! `LineScanParser` and the resilient fallback should never panic on any input.

#![no_main]

use libfuzzer_sys::fuzz_target;

use logdigest_parser::{LineScanParser, LogParser, ResilientParser};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let scanned = LineScanParser.parse(input);
        assert!(scanned.flaky.is_some());
        let _ = ResilientParser.parse(input);
    }
});
