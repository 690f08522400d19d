//! Per-Benchmark Numeric Analysis
//!
//! Everything the chart pages print is derived here, up front, so a build
//! over degenerate data fails before a single page is drawn.

use crate::ReportError;
use inkbench_stats::{
    Distribution, RegressionSummary, compute_distribution, compute_regression,
};
use serde::{Deserialize, Serialize};

/// Captured timings for one benchmarked snippet.
///
/// Samples are rounded millisecond durations, one per execution run, in
/// execution order. Immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Display title of the snippet
    pub title: String,
    /// Number of runs (`samples.len()`)
    pub runs: usize,
    /// Millisecond duration of each run
    pub samples: Vec<u64>,
}

impl BenchmarkResult {
    /// Wrap a captured sample series.
    pub fn new(title: impl Into<String>, samples: Vec<u64>) -> Self {
        Self {
            title: title.into(),
            runs: samples.len(),
            samples,
        }
    }
}

/// Derived statistics for one benchmark, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultAnalysis {
    /// Snippet title
    pub title: String,
    /// Number of runs
    pub runs: usize,
    /// Cumulative elapsed time after each run, in ms
    pub cumulative: Vec<f64>,
    /// OLS fit of cumulative time against run index
    pub regression: RegressionSummary,
    /// Frequency distribution of the raw samples
    pub distribution: Distribution,
    /// Values tied for the highest occurrence count, ascending
    pub most_frequent: Vec<u64>,
    /// Values tied for the lowest occurrence count, ascending
    pub least_frequent: Vec<u64>,
    /// Σy / Σx, the average elapsed time per iteration
    pub average_per_iteration: f64,
}

/// Running cumulative sum of a sample series.
pub fn cumulative_series(samples: &[u64]) -> Vec<f64> {
    let mut total = 0.0;
    samples
        .iter()
        .map(|&s| {
            total += s as f64;
            total
        })
        .collect()
}

/// Analyze one benchmark result.
///
/// Regresses `(run index + 1, cumulative elapsed)` pairs and distributes
/// the raw samples. Fails fast on inputs no honest chart can be drawn
/// from: fewer than two runs, or samples the regression denominators
/// reject.
pub fn analyze(result: &BenchmarkResult) -> Result<ResultAnalysis, ReportError> {
    let cumulative = cumulative_series(&result.samples);
    let xs: Vec<f64> = (1..=result.samples.len()).map(|i| i as f64).collect();
    let regression = compute_regression(&xs, &cumulative)?;
    let distribution = compute_distribution(&result.samples)?;

    let most_frequent = distribution.most_frequent();
    let least_frequent = distribution.least_frequent();
    let average_per_iteration = regression.sum_y / regression.sum_x;

    Ok(ResultAnalysis {
        title: result.title.clone(),
        runs: result.runs,
        cumulative,
        regression,
        distribution,
        most_frequent,
        least_frequent,
        average_per_iteration,
    })
}
