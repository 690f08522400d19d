//! Timing Harness
//!
//! Drives a snippet closure a fixed number of times and records one
//! rounded millisecond duration per run. Deliberately simple: wall-clock
//! per run, no warmup or batching, because the report downstream analyzes
//! the raw run-by-run series.

use indicatif::{ProgressBar, ProgressStyle};
use inkbench_report::BenchmarkResult;
use std::time::Instant;

/// Time `runs` executions of `snippet`.
///
/// Each run's wall-clock duration is rounded to whole milliseconds; a run
/// under half a millisecond records as 0.
pub fn run<F: FnMut()>(title: &str, runs: usize, snippet: F) -> BenchmarkResult {
    run_inner(title, runs, snippet, None)
}

/// Same as [`run`], with a progress bar on stderr for long suites.
pub fn run_with_progress<F: FnMut()>(title: &str, runs: usize, snippet: F) -> BenchmarkResult {
    let bar = ProgressBar::new(runs as u64);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message(title.to_string());
    let result = run_inner(title, runs, snippet, Some(&bar));
    bar.finish();
    result
}

fn run_inner<F: FnMut()>(
    title: &str,
    runs: usize,
    mut snippet: F,
    bar: Option<&ProgressBar>,
) -> BenchmarkResult {
    let mut samples = Vec::with_capacity(runs);
    for _ in 0..runs {
        let start = Instant::now();
        snippet();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        samples.push(elapsed_ms.round() as u64);
        if let Some(bar) = bar {
            bar.inc(1);
        }
    }
    BenchmarkResult::new(title, samples)
}
