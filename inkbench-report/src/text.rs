//! Prose Assembly
//!
//! The report joins lists the way a sentence would ("A, B and C") and
//! prints the fitted trend as a readable equation. Both are small enough
//! to be easy to get wrong in-line, so they live here with tests.

use std::fmt::Display;

/// Join items into prose: `"A"`, `"A and B"`, `"A, B and C"`.
pub fn join_with_and<T: Display>(items: &[T]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            if i + 1 < items.len() {
                out.push_str(", ");
            } else {
                out.push_str(" and ");
            }
        }
        out.push_str(&item.to_string());
    }
    out
}

/// Suffix for the i-th of `len` chunks in a flowing enumeration sentence.
///
/// `", "` while at least two items remain, `" and "` before the last item,
/// `"."` to close the sentence.
pub(crate) fn enumeration_suffix(i: usize, len: usize) -> &'static str {
    let remaining = len - 1 - i;
    if remaining >= 2 {
        ", "
    } else if remaining == 1 {
        " and "
    } else {
        "."
    }
}

/// Format the fitted trend `f(x) = a·x + b` with natural sign handling.
///
/// Zero coefficients collapse: `a == 0` prints just the intercept,
/// `b == 0` prints just the slope term, both zero prints `0`. A negative
/// intercept renders as a subtraction.
pub fn format_equation(slope: f64, intercept: f64) -> String {
    let a = round3(slope);
    let b = round3(intercept);
    if a == 0.0 {
        return format!("{}", b);
    }
    if b == 0.0 {
        return format!("{}x", a);
    }
    if b < 0.0 {
        format!("{}x - {}", a, -b)
    } else {
        format!("{}x + {}", a, b)
    }
}

/// `"time."` or `"times."` for an occurrence count.
pub(crate) fn times_word(count: u64) -> &'static str {
    if count == 1 { "time." } else { "times." }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_one() {
        assert_eq!(join_with_and(&["A"]), "A");
    }

    #[test]
    fn test_join_two() {
        assert_eq!(join_with_and(&["A", "B"]), "A and B");
    }

    #[test]
    fn test_join_three() {
        assert_eq!(join_with_and(&["A", "B", "C"]), "A, B and C");
    }

    #[test]
    fn test_join_numbers() {
        assert_eq!(join_with_and(&[3u64, 5, 9]), "3, 5 and 9");
    }

    #[test]
    fn test_enumeration_suffixes() {
        assert_eq!(enumeration_suffix(0, 1), ".");
        assert_eq!(enumeration_suffix(0, 2), " and ");
        assert_eq!(enumeration_suffix(0, 3), ", ");
        assert_eq!(enumeration_suffix(1, 3), " and ");
        assert_eq!(enumeration_suffix(2, 3), ".");
    }

    #[test]
    fn test_equation_full() {
        assert_eq!(format_equation(2.5, 1.0), "2.5x + 1");
    }

    #[test]
    fn test_equation_negative_intercept() {
        assert_eq!(format_equation(2.0, -1.5), "2x - 1.5");
    }

    #[test]
    fn test_equation_zero_slope() {
        assert_eq!(format_equation(0.0, 3.0), "3");
        assert_eq!(format_equation(0.0, -3.0), "-3");
    }

    #[test]
    fn test_equation_zero_intercept() {
        assert_eq!(format_equation(1.25, 0.0), "1.25x");
    }

    #[test]
    fn test_equation_all_zero() {
        assert_eq!(format_equation(0.0, 0.0), "0");
    }

    #[test]
    fn test_times_word() {
        assert_eq!(times_word(1), "time.");
        assert_eq!(times_word(4), "times.");
    }
}
