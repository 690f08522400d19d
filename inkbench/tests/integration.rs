//! Integration tests for inkbench
//!
//! These tests verify the end-to-end behavior of the report engine, from
//! captured samples through pagination to a persisted document.

use inkbench::{
    BenchmarkResult, Margins, RecordingSurface, ReportBuilder, StatsError, Surface,
    compute_distribution, compute_regression, format_summary, generate_report, join_with_and,
};

/// One small result produces the full page sequence: title+TOC,
/// introduction, chart page, distribution page.
#[test]
fn test_end_to_end_page_count() {
    let mut surface = RecordingSurface::a4();
    let mut builder = ReportBuilder::new(&mut surface);
    let analyses = builder
        .build(&[BenchmarkResult::new("A", vec![1, 2, 3])])
        .unwrap();

    assert!(surface.page_count() >= 3);
    assert_eq!(surface.page_count(), 4);
    assert_eq!(analyses.len(), 1);
}

/// Regression over cumulative sums 1, 3, 6 against run indices 1..=3.
#[test]
fn test_end_to_end_regression_summary() {
    let mut surface = RecordingSurface::a4();
    let mut builder = ReportBuilder::new(&mut surface);
    let analyses = builder
        .build(&[BenchmarkResult::new("A", vec![1, 2, 3])])
        .unwrap();

    let fit = &analyses[0].regression;
    assert_eq!(fit.n, 3);
    assert!((fit.slope - 2.5).abs() < 1e-9);
    assert!(fit.slope >= 1.0);
    assert!(fit.r_squared >= 0.0 && fit.r_squared <= 1.0);
    assert_eq!(fit.sum_x, 6.0);
    assert_eq!(fit.sum_y, 10.0);
}

/// The persisted document is a single HTML file with one SVG per page.
#[test]
fn test_generate_report_persists_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    let results = [
        BenchmarkResult::new("insertion sort", vec![3, 3, 5, 3, 5, 5, 5]),
        BenchmarkResult::new("vector push", vec![1, 2, 1, 2, 3]),
    ];
    let analyses = generate_report(&results, &path).unwrap();
    assert_eq!(analyses.len(), 2);

    let html = std::fs::read_to_string(&path).unwrap();
    // Title+TOC, intro, then two pages per result.
    assert_eq!(html.matches("<svg").count(), 6);
    assert!(html.contains("Benchmarking report"));
    assert!(html.contains("Data analysis of insertion sort"));
}

/// A failed build must not leave a partial document behind.
#[test]
fn test_failed_build_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    let results = [BenchmarkResult::new("degenerate", vec![])];
    assert!(generate_report(&results, &path).is_err());
    assert!(!path.exists());
}

/// Statistics engine properties surfaced through the facade re-exports.
#[test]
fn test_statistics_facade() {
    let dist = compute_distribution(&[3, 3, 5, 3, 5, 5, 5]).unwrap();
    assert_eq!(dist.pairs(), &[(3, 3), (5, 4)]);
    assert_eq!(dist.most_frequent(), vec![5]);
    assert_eq!(dist.least_frequent(), vec![3]);

    assert_eq!(compute_distribution(&[]), Err(StatsError::EmptyInput));

    let fit = compute_regression(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
    assert!((fit.slope - 2.0).abs() < 1e-12);
    assert!((fit.intercept).abs() < 1e-12);
}

/// Title-list joining rules from the introduction sentence.
#[test]
fn test_title_joining() {
    assert_eq!(join_with_and(&["A"]), "A");
    assert_eq!(join_with_and(&["A", "B"]), "A and B");
    assert_eq!(join_with_and(&["A", "B", "C"]), "A, B and C");
}

/// The console summary and the report agree on the captured numbers.
#[test]
fn test_console_summary_matches_samples() {
    let result = inkbench::run("busy loop", 6, || {
        std::hint::black_box((0..1000u64).sum::<u64>());
    });
    assert_eq!(result.samples.len(), 6);

    let summary = format_summary(&result);
    assert!(summary.contains("busy loop: 6 runs."));
    assert!(summary.contains("Total execution time:"));
}

/// Custom margins shrink the printable area and force earlier pagination.
#[test]
fn test_custom_margins_paginate_earlier() {
    let results: Vec<BenchmarkResult> = (0..40)
        .map(|i| BenchmarkResult::new(format!("bench-{i}"), vec![1, 2, 3]))
        .collect();

    let mut narrow = RecordingSurface::a4();
    ReportBuilder::with_margins(&mut narrow, Margins { x: 60.0, y: 250.0 })
        .build(&results)
        .unwrap();

    let mut default = RecordingSurface::a4();
    ReportBuilder::new(&mut default).build(&results).unwrap();

    // The tall TOC overflows sooner with a quarter-height printable area.
    assert!(narrow.page_count() > default.page_count());
}

/// Two documents built in the same process never share layout state.
#[test]
fn test_independent_documents() {
    let mut first = RecordingSurface::a4();
    let mut second = RecordingSurface::a4();
    let results = [BenchmarkResult::new("A", vec![1, 2, 3])];

    ReportBuilder::new(&mut first).build(&results).unwrap();
    ReportBuilder::new(&mut second).build(&results).unwrap();

    assert_eq!(first.page_count(), second.page_count());
    assert_eq!(first.page_text(0), second.page_text(0));
}
