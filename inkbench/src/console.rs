//! Console Summary
//!
//! Terminal-friendly one-benchmark summary, printed by callers that want
//! quick numbers before the full report.

use inkbench_report::BenchmarkResult;

/// Format a benchmark result for human-readable terminal display.
///
/// Sub-millisecond aggregates print as `< 1ms` rather than a misleading
/// zero.
pub fn format_summary(result: &BenchmarkResult) -> String {
    let total: u64 = result.samples.iter().sum();
    let average = if result.runs > 0 {
        total as f64 / result.runs as f64
    } else {
        0.0
    };
    let highest = result.samples.iter().max().copied().unwrap_or(0);
    let lowest = result.samples.iter().min().copied().unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!("{}: {} runs.\n", result.title, result.runs));
    output.push_str("+-----------------------------+\n");
    output.push_str(&format!("Total execution time: {total}ms.\n"));

    if average >= 1.0 {
        output.push_str(&format!("Average execution time: {average}ms.\n"));
    } else {
        output.push_str("Average execution time: < 1ms.\n");
    }
    if highest >= 1 {
        output.push_str(&format!("Highest execution time: {highest}ms.\n"));
    } else {
        output.push_str("Highest execution time: < 1ms.\n");
    }
    if lowest >= 1 {
        output.push_str(&format!("Lowest execution time: {lowest}ms.\n"));
    } else {
        output.push_str("Lowest execution time: < 1ms.\n");
    }
    output.push_str("+-----------------------------+\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_reports_aggregates() {
        let result = BenchmarkResult::new("sort", vec![2, 4, 6]);
        let summary = format_summary(&result);
        assert!(summary.contains("sort: 3 runs."));
        assert!(summary.contains("Total execution time: 12ms."));
        assert!(summary.contains("Average execution time: 4ms."));
        assert!(summary.contains("Highest execution time: 6ms."));
        assert!(summary.contains("Lowest execution time: 2ms."));
    }

    #[test]
    fn test_sub_millisecond_substitution() {
        let result = BenchmarkResult::new("fast", vec![0, 0, 1]);
        let summary = format_summary(&result);
        assert!(summary.contains("Average execution time: < 1ms."));
        assert!(summary.contains("Lowest execution time: < 1ms."));
        assert!(summary.contains("Highest execution time: 1ms."));
    }
}
