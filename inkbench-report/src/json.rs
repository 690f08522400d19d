//! JSON Companion Output
//!
//! Machine-readable dump of the per-benchmark analyses, for tooling that
//! wants the numbers without scraping the document.

use crate::analysis::ResultAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema wrapper around the serialized analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDocument {
    /// Schema identifier
    pub schema: String,
    /// Generation timestamp
    pub generated: DateTime<Utc>,
    /// One analysis per benchmark result, in presentation order
    pub results: Vec<ResultAnalysis>,
}

/// Generate a prettified JSON report of the analyses.
pub fn generate_json_report(analyses: &[ResultAnalysis]) -> Result<String, serde_json::Error> {
    let document = AnalysisDocument {
        schema: "inkbench/analysis/v1".to_string(),
        generated: Utc::now(),
        results: analyses.to_vec(),
    };
    serde_json::to_string_pretty(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{BenchmarkResult, analyze};

    #[test]
    fn test_json_round_trips() {
        let analysis = analyze(&BenchmarkResult::new("A", vec![1, 2, 3])).unwrap();
        let json = generate_json_report(&[analysis.clone()]).unwrap();

        let parsed: AnalysisDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.schema, "inkbench/analysis/v1");
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0], analysis);
    }

    #[test]
    fn test_json_contains_regression_fields() {
        let analysis = analyze(&BenchmarkResult::new("A", vec![1, 2, 3])).unwrap();
        let json = generate_json_report(&[analysis]).unwrap();
        assert!(json.contains("\"slope\""));
        assert!(json.contains("\"r_squared\""));
        assert!(json.contains("\"most_frequent\""));
    }
}
