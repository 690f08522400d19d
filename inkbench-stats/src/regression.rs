//! Ordinary Least-Squares Regression
//!
//! Fits `y = slope * x + intercept` to paired samples using the closed-form
//! normal equations. All raw sums are kept in the summary because the report
//! prints them alongside the fitted coefficients.

use crate::{MIN_REGRESSION_SAMPLES, StatsError};
use serde::{Deserialize, Serialize};

/// Complete OLS fit over a pair of equal-length sequences.
///
/// All arithmetic is `f64`; nothing is rounded until presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionSummary {
    /// Σx
    pub sum_x: f64,
    /// Σy
    pub sum_y: f64,
    /// Σ(x·y)
    pub sum_xy: f64,
    /// Σx²
    pub sum_xx: f64,
    /// Σy²
    pub sum_yy: f64,
    /// Number of paired samples
    pub n: usize,
    /// Fitted slope `a` in `y = a·x + b`
    pub slope: f64,
    /// Fitted intercept `b` in `y = a·x + b`
    pub intercept: f64,
    /// Pearson correlation coefficient `r`
    pub correlation: f64,
    /// Coefficient of determination `r²`
    pub r_squared: f64,
}

/// Fit an OLS regression to `(xs[i], ys[i])` pairs.
///
/// Fails with [`StatsError::InvalidInput`] when the sequences differ in
/// length, hold fewer than two samples, or one of the sequences has zero
/// variance (the normal-equation denominators vanish and no line exists).
///
/// # Examples
///
/// ```
/// use inkbench_stats::compute_regression;
///
/// let xs = [1.0, 2.0, 3.0, 4.0];
/// let ys = [3.0, 5.0, 7.0, 9.0];
/// let fit = compute_regression(&xs, &ys).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.intercept - 1.0).abs() < 1e-12);
/// assert!((fit.r_squared - 1.0).abs() < 1e-12);
/// ```
pub fn compute_regression(xs: &[f64], ys: &[f64]) -> Result<RegressionSummary, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::InvalidInput(format!(
            "sequence lengths differ: {} x values vs {} y values",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < MIN_REGRESSION_SAMPLES {
        return Err(StatsError::InvalidInput(format!(
            "need at least {} samples, got {}",
            MIN_REGRESSION_SAMPLES,
            xs.len()
        )));
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
        sum_yy += y * y;
    }

    let n = xs.len() as f64;
    let denom_x = n * sum_xx - sum_x * sum_x;
    if denom_x == 0.0 {
        return Err(StatsError::InvalidInput(
            "all x values are identical".to_string(),
        ));
    }
    let denom_y = n * sum_yy - sum_y * sum_y;
    if denom_y == 0.0 {
        return Err(StatsError::InvalidInput(
            "all y values are identical".to_string(),
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom_x;
    let intercept = (sum_y - slope * sum_x) / n;
    let correlation = (n * sum_xy - sum_x * sum_y) / (denom_x.sqrt() * denom_y.sqrt());
    let r_squared = correlation * correlation;

    Ok(RegressionSummary {
        sum_x,
        sum_y,
        sum_xy,
        sum_xx,
        sum_yy,
        n: xs.len(),
        slope,
        intercept,
        correlation,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys: Vec<f64> = xs.iter().map(|x| 3.5 * x - 2.0).collect();
        let fit = compute_regression(&xs, &ys).unwrap();

        assert!((fit.slope - 3.5).abs() < 1e-12);
        assert!((fit.intercept + 2.0).abs() < 1e-12);
        assert!((fit.correlation - 1.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert_eq!(fit.n, 5);
    }

    #[test]
    fn test_matches_independent_fit() {
        // Coefficients computed independently from the covariance form:
        // slope = cov(x, y) / var(x), intercept = mean(y) - slope * mean(x)
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let ys = [2.0, 4.5, 5.0, 8.0, 8.5, 12.0];

        let mean_x: f64 = xs.iter().sum::<f64>() / xs.len() as f64;
        let mean_y: f64 = ys.iter().sum::<f64>() / ys.len() as f64;
        let cov: f64 = xs
            .iter()
            .zip(&ys)
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();
        let var_x: f64 = xs.iter().map(|x| (x - mean_x) * (x - mean_x)).sum();
        let expected_slope = cov / var_x;
        let expected_intercept = mean_y - expected_slope * mean_x;

        let fit = compute_regression(&xs, &ys).unwrap();
        assert!((fit.slope - expected_slope).abs() < 1e-10);
        assert!((fit.intercept - expected_intercept).abs() < 1e-10);
    }

    #[test]
    fn test_minimizes_residuals() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [1.2, 1.9, 3.4, 3.8, 5.3];
        let fit = compute_regression(&xs, &ys).unwrap();

        let rss = |a: f64, b: f64| -> f64 {
            xs.iter()
                .zip(&ys)
                .map(|(x, y)| {
                    let r = y - (a * x + b);
                    r * r
                })
                .sum()
        };

        let best = rss(fit.slope, fit.intercept);
        // Any perturbation of the fitted coefficients must not improve the fit.
        for da in [-0.05, 0.05] {
            for db in [-0.05, 0.05] {
                assert!(rss(fit.slope + da, fit.intercept + db) >= best);
            }
        }
    }

    #[test]
    fn test_r_squared_in_unit_interval() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let ys = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0];
        let fit = compute_regression(&xs, &ys).unwrap();
        assert!(fit.r_squared >= 0.0 && fit.r_squared <= 1.0);
    }

    #[test]
    fn test_length_mismatch_fails() {
        let err = compute_regression(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
    }

    #[test]
    fn test_too_short_fails() {
        let err = compute_regression(&[1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
    }

    #[test]
    fn test_degenerate_x_fails() {
        let err = compute_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
    }

    #[test]
    fn test_deterministic() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 6.0];
        let a = compute_regression(&xs, &ys).unwrap();
        let b = compute_regression(&xs, &ys).unwrap();
        assert_eq!(a, b);
        assert!((a.slope - 2.5).abs() < 1e-12);
    }
}
