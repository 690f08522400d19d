#![warn(missing_docs)]
//! # Inkbench
//!
//! Times repeated executions of a code snippet and renders the
//! measurements into a multi-page document: a linear-regression trend
//! chart of cumulative execution time and a frequency-distribution step
//! chart per benchmark, behind a title page and table of contents.
//!
//! ## Quick Start
//!
//! ```no_run
//! use inkbench::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let result = inkbench::run("vector sort", 50, || {
//!         let mut v: Vec<u32> = (0..10_000).rev().collect();
//!         v.sort();
//!     });
//!     println!("{}", inkbench::format_summary(&result));
//!     inkbench::generate_report(&[result], "benchmark-report.html")?;
//!     Ok(())
//! }
//! ```
//!
//! The report layer is backend-agnostic: anything implementing
//! [`Surface`] can receive a document, and the bundled [`SvgSurface`]
//! persists one as a single self-contained HTML file.

mod console;
mod harness;

pub use console::format_summary;
pub use harness::{run, run_with_progress};

// Re-export the statistics engine
pub use inkbench_stats::{
    Distribution, RegressionSummary, StatsError, compute_distribution, compute_regression,
};

// Re-export the rendering layer
pub use inkbench_render::{
    Align, Color, DocumentMeta, DocumentWriter, DrawOp, FontSpec, LayoutCursor, Margins, Point,
    Rect, RecordingSurface, RenderError, Size, Surface, SvgSurface, fraction, lerp,
};

// Re-export the report generator
pub use inkbench_report::{
    BenchmarkResult, ReportBuilder, ReportError, ResultAnalysis, TocEntry, analyze,
    generate_json_report, join_with_and,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BenchmarkResult, ReportBuilder, Surface, SvgSurface, format_summary, generate_report, run,
    };
}

use std::path::Path;

/// Generate the full report document for `results` and persist it.
///
/// Builds the document on an A4 [`SvgSurface`] and saves it to `path` as a
/// single HTML file. Nothing is written when the build fails. Returns the
/// per-benchmark analyses for console output or the JSON companion.
pub fn generate_report(
    results: &[BenchmarkResult],
    path: impl AsRef<Path>,
) -> anyhow::Result<Vec<ResultAnalysis>> {
    let meta = DocumentMeta::new("Benchmarking report", "inkbench profiler");
    let mut surface = SvgSurface::a4(meta);
    let analyses = ReportBuilder::new(&mut surface).build(results)?;
    surface.save(path)?;
    Ok(analyses)
}
