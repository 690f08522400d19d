//! Frequency Distribution
//!
//! Aggregates a sample series into `(value, count)` pairs sorted ascending
//! by value. The chart renderer needs the post-sort extrema for axis
//! scaling, so they are exposed directly.

use crate::StatsError;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Value→frequency distribution over a sample series.
///
/// Pairs are sorted ascending by value and the pair list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pairs: Vec<(u64, u64)>,
}

impl Distribution {
    /// `(value, count)` pairs, sorted ascending by value.
    pub fn pairs(&self) -> &[(u64, u64)] {
        &self.pairs
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false`; kept for API symmetry with slice types.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Smallest observed value.
    pub fn min_value(&self) -> u64 {
        // Pairs are non-empty and sorted, guaranteed by the constructor.
        self.pairs[0].0
    }

    /// Largest observed value.
    pub fn max_value(&self) -> u64 {
        self.pairs[self.pairs.len() - 1].0
    }

    /// Highest occurrence count of any value.
    pub fn max_count(&self) -> u64 {
        self.pairs.iter().map(|&(_, c)| c).max().unwrap_or(0)
    }

    /// Lowest occurrence count of any value.
    pub fn min_count(&self) -> u64 {
        self.pairs.iter().map(|&(_, c)| c).min().unwrap_or(0)
    }

    /// All values whose count equals [`max_count`](Self::max_count),
    /// ascending.
    pub fn most_frequent(&self) -> Vec<u64> {
        let max = self.max_count();
        self.pairs
            .iter()
            .filter(|&&(_, c)| c == max)
            .map(|&(v, _)| v)
            .collect()
    }

    /// All values whose count equals [`min_count`](Self::min_count),
    /// ascending.
    pub fn least_frequent(&self) -> Vec<u64> {
        let min = self.min_count();
        self.pairs
            .iter()
            .filter(|&&(_, c)| c == min)
            .map(|&(v, _)| v)
            .collect()
    }
}

/// Build the frequency distribution of a sample series.
///
/// Scans the series once, then sorts the distinct values ascending.
/// Fails with [`StatsError::EmptyInput`] when there are no samples.
///
/// # Examples
///
/// ```
/// use inkbench_stats::compute_distribution;
///
/// let dist = compute_distribution(&[3, 3, 5, 3, 5, 5, 5]).unwrap();
/// assert_eq!(dist.pairs(), &[(3, 3), (5, 4)]);
/// assert_eq!(dist.most_frequent(), vec![5]);
/// ```
pub fn compute_distribution(samples: &[u64]) -> Result<Distribution, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut counts: FxHashMap<u64, u64> = FxHashMap::default();
    for &sample in samples {
        *counts.entry(sample).or_insert(0) += 1;
    }

    let mut pairs: Vec<(u64, u64)> = counts.into_iter().collect();
    pairs.sort_unstable_by_key(|&(value, _)| value);

    Ok(Distribution { pairs })
}
