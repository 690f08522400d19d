//! Geometry Primitives and Interpolation
//!
//! Small value types shared by the surface, cursor, and chart code, plus
//! the linear interpolation used to project data coordinates onto page
//! coordinates.

use crate::RenderError;

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downward)
    pub y: f64,
}

impl Point {
    /// Construct a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Construct a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The same rectangle shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Linear interpolation: `a + (b - a) * t`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Normalize `value` into the `[min, max]` domain as a `[0, 1]` fraction.
///
/// This is the inverse of [`lerp`] and the place where a zero-width chart
/// domain surfaces: fails with [`RenderError::DegenerateRange`] when
/// `max == min`.
#[inline]
pub fn fraction(value: f64, min: f64, max: f64) -> Result<f64, RenderError> {
    if max == min {
        return Err(RenderError::DegenerateRange { min, max });
    }
    Ok((value - min) / (max - min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 100.0, 0.25), 25.0);
        assert_eq!(lerp(0.0, 100.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 100.0, 1.0), 100.0);
        // A collapsed domain interpolates to itself.
        assert_eq!(lerp(10.0, 10.0, 0.5), 10.0);
        // Downward interpolation.
        assert_eq!(lerp(100.0, 0.0, 0.25), 75.0);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(fraction(25.0, 0.0, 100.0).unwrap(), 0.25);
        assert_eq!(fraction(0.0, 0.0, 100.0).unwrap(), 0.0);
        assert_eq!(fraction(100.0, 0.0, 100.0).unwrap(), 1.0);
    }

    #[test]
    fn test_fraction_degenerate_domain() {
        let err = fraction(10.0, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, RenderError::DegenerateRange { .. }));
    }

    #[test]
    fn test_fraction_inverts_lerp() {
        let (min, max) = (60.0, 535.0);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let v = lerp(min, max, t);
            assert!((fraction(v, min, max).unwrap() - t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
        assert_eq!(r.translated(5.0, -5.0), Rect::new(15.0, 15.0, 30.0, 40.0));
    }
}
