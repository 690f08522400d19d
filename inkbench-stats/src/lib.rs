#![warn(missing_docs)]
//! Inkbench Statistical Engine
//!
//! Provides the numeric analysis behind the report pages:
//! - Closed-form ordinary least-squares regression (slope, intercept,
//!   correlation, R²) over paired samples
//! - Value→frequency distribution over a sample series, sorted for
//!   presentation with axis-scaling extrema exposed
//!
//! Everything in this crate is a pure function of its inputs: same samples,
//! same summary, bit for bit.

mod distribution;
mod regression;

pub use distribution::{Distribution, compute_distribution};
pub use regression::{RegressionSummary, compute_regression};

use thiserror::Error;

/// Minimum number of paired samples a regression needs
pub const MIN_REGRESSION_SAMPLES: usize = 2;

/// Errors raised by the statistics engine.
///
/// These are precondition violations: the caller handed us data no honest
/// chart can be drawn from. They are surfaced immediately rather than
/// papered over with substitute values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Regression input is unusable: mismatched lengths, fewer than two
    /// samples, or zero variance in one of the sequences.
    #[error("invalid regression input: {0}")]
    InvalidInput(String),

    /// A distribution was requested over an empty sample series.
    #[error("cannot build a distribution from an empty sample series")]
    EmptyInput,
}
