// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};
use logdigest_parser::{LineScanParser, LogParser, SummaryLineParser};

/// Build a log resembling `pytest --durations=0 -rs` output for `n` tests
fn synthetic_log(n: usize) -> String {
    let mut log = String::from("============================= test session starts ==============================\n");
    log.push_str(&format!("collected {n} items\n\n"));
    for chunk in 0..n.div_ceil(50) {
        let marks = ".".repeat(50.min(n - chunk * 50));
        log.push_str(&format!("tests/test_mod_{chunk}.py {marks} [ 50%]\n"));
    }
    log.push_str("============================= slowest durations ==============================\n");
    for i in 0..n {
        log.push_str(&format!("0.{:03}s call     tests/test_mod.py::test_case_{i}\n", i % 1000));
    }
    log.push_str(&format!("==================== {n} passed in 12.34s ====================\n"));
    log
}

fn parser_benchmark(c: &mut Criterion) {
    let log = synthetic_log(2_000);

    c.bench_function("summary_line_parser_2000_tests", |b| {
        b.iter(|| SummaryLineParser.parse(std::hint::black_box(&log)))
    });

    c.bench_function("line_scan_parser_2000_tests", |b| {
        b.iter(|| LineScanParser.parse(std::hint::black_box(&log)))
    });
}

criterion_group!(benches, parser_benchmark);
criterion_main!(benches);
