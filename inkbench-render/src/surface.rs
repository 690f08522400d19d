//! The Drawing Surface Abstraction
//!
//! [`Surface`] is the external collaborator contract from the report
//! engine's point of view: a paged 2-D canvas that can measure and draw
//! text, lines, rectangles, and ellipses. The layout and report code only
//! ever talk to this trait; backends decide what a page physically is.

use crate::geometry::{Point, Rect, Size};

/// Nine-way text alignment within a bounding rectangle.
///
/// The discriminant encodes the alignment grid: `value % 3` is the
/// horizontal component and `value / 3` the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Bottom edge, left edge
    BottomLeft,
    /// Bottom edge, horizontally centered
    BottomCenter,
    /// Bottom edge, right edge
    BottomRight,
    /// Vertically centered, left edge
    CenterLeft,
    /// Dead center
    Center,
    /// Vertically centered, right edge
    CenterRight,
    /// Top edge, left edge
    TopLeft,
    /// Top edge, horizontally centered
    TopCenter,
    /// Top edge, right edge
    TopRight,
}

/// Horizontal alignment component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    /// Anchor to the left edge
    Left,
    /// Anchor to the horizontal center
    Center,
    /// Anchor to the right edge
    Right,
}

/// Vertical alignment component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    /// Anchor to the top edge
    Top,
    /// Anchor to the vertical center
    Center,
    /// Anchor to the bottom edge
    Bottom,
}

impl Align {
    /// Horizontal component of the alignment.
    pub fn horizontal(self) -> HAlign {
        match self as u8 % 3 {
            0 => HAlign::Left,
            1 => HAlign::Center,
            _ => HAlign::Right,
        }
    }

    /// Vertical component of the alignment.
    pub fn vertical(self) -> VAlign {
        match self as u8 / 3 {
            0 => VAlign::Bottom,
            1 => VAlign::Center,
            _ => VAlign::Top,
        }
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Construct a color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// White.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Red, used for data markers and the trend line.
    pub const RED: Color = Color::rgb(220, 20, 20);
    /// Light gray, used for chart grid lines.
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);

    /// CSS hex form, e.g. `#4472c4`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A font request: family name and size in page units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Font family name
    pub family: &'static str,
    /// Size in page units
    pub size: f64,
}

impl FontSpec {
    /// Construct a font spec.
    pub const fn new(family: &'static str, size: f64) -> Self {
        Self { family, size }
    }
}

/// Stroke style for lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in page units
    pub width: f64,
}

impl LineStyle {
    /// A solid stroke of the given color, one unit wide.
    pub const fn solid(color: Color) -> Self {
        Self { color, width: 1.0 }
    }
}

/// Deterministic text-extent estimate shared by all backends.
///
/// Backends without font metrics (SVG, recording) approximate the advance
/// width from the glyph count. The exact constant matters less than every
/// backend measuring identically, so layout decisions are reproducible.
pub fn approx_text_size(text: &str, font: &FontSpec) -> Size {
    let glyphs = text.chars().count() as f64;
    Size::new(glyphs * font.size * 0.55, font.size * 1.2)
}

/// A paged 2-D drawing surface.
///
/// Pages are append-only: drawing always targets the page most recently
/// created with [`new_page`](Surface::new_page), and earlier pages are
/// immutable once superseded.
pub trait Surface {
    /// Fixed size of every page.
    fn page_size(&self) -> Size;

    /// Number of pages created so far.
    fn page_count(&self) -> usize;

    /// Append a fresh page and make it current. Returns its index.
    fn new_page(&mut self) -> usize;

    /// Measure the extent of `text` in `font`.
    fn measure_text(&self, text: &str, font: &FontSpec) -> Size;

    /// Draw `text` aligned within `rect` on the current page.
    fn draw_text(&mut self, text: &str, rect: Rect, font: &FontSpec, color: Color, align: Align);

    /// Draw a line segment on the current page.
    fn draw_line(&mut self, from: Point, to: Point, style: LineStyle);

    /// Fill a rectangle on the current page.
    fn draw_rect(&mut self, rect: Rect, fill: Color);

    /// Draw an outlined, filled ellipse inscribed in `rect` on the current
    /// page.
    fn draw_ellipse(&mut self, rect: Rect, outline: Color, fill: Color);
}
