#![warn(missing_docs)]
//! Inkbench Report Generator
//!
//! Turns captured benchmark timings into a multi-page document:
//! - Title page with a table of contents
//! - Introduction page enumerating every benchmarked snippet
//! - Per-benchmark chart page (cumulative time vs. run index with a
//!   least-squares trend line and a textual regression summary)
//! - Per-benchmark distribution page (execution-time frequencies as a
//!   connected step chart)
//!
//! The generator only talks to the rendering layer's `Surface`/writer
//! abstractions; picking a backend and persisting the document belong to
//! the caller.

mod analysis;
mod builder;
mod charts;
mod json;
mod style;
mod text;

pub use analysis::{BenchmarkResult, ResultAnalysis, analyze, cumulative_series};
pub use builder::{ReportBuilder, TocEntry};
pub use json::generate_json_report;
pub use text::{format_equation, join_with_and};

use inkbench_render::RenderError;
use inkbench_stats::StatsError;
use thiserror::Error;

/// Errors that abort a report build.
///
/// There is no partial-document recovery: either the whole report is
/// produced or generation fails before anything is persisted.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The statistics engine rejected the captured samples.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// The rendering layer hit a degenerate chart domain or I/O failure.
    #[error(transparent)]
    Render(#[from] RenderError),
}
