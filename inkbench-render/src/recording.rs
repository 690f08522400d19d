//! Recording Backend
//!
//! Captures every draw call instead of rendering it, so layout and report
//! behavior can be asserted without parsing backend output.

use crate::geometry::{Point, Rect, Size};
use crate::surface::{Align, Color, FontSpec, LineStyle, Surface, approx_text_size};
use crate::svg::A4;

/// One captured draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Text drawn aligned within a rectangle
    Text {
        /// The drawn string
        text: String,
        /// Bounding rectangle
        rect: Rect,
        /// Requested alignment
        align: Align,
    },
    /// A line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
    },
    /// A filled rectangle
    Rect {
        /// The filled area
        rect: Rect,
    },
    /// An outlined ellipse
    Ellipse {
        /// Bounding rectangle
        rect: Rect,
    },
}

/// Surface that records operations per page.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Size,
    pages: Vec<Vec<DrawOp>>,
}

impl RecordingSurface {
    /// A recording surface with the given page size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pages: Vec::new(),
        }
    }

    /// A recording surface with A4 pages.
    pub fn a4() -> Self {
        Self::new(A4)
    }

    /// Operations captured per page, in draw order.
    pub fn pages(&self) -> &[Vec<DrawOp>] {
        &self.pages
    }

    /// All text drawn on `page`, concatenated in draw order.
    pub fn page_text(&self, page: usize) -> String {
        let mut out = String::new();
        for op in &self.pages[page] {
            if let DrawOp::Text { text, .. } = op {
                out.push_str(text);
                out.push('\n');
            }
        }
        out
    }

    /// Count of operations matching `predicate` on `page`.
    pub fn count_ops(&self, page: usize, predicate: impl Fn(&DrawOp) -> bool) -> usize {
        self.pages[page].iter().filter(|op| predicate(op)).count()
    }

    fn record(&mut self, op: DrawOp) {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        self.pages[last].push(op);
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn new_page(&mut self) -> usize {
        self.pages.push(Vec::new());
        self.pages.len() - 1
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> Size {
        approx_text_size(text, font)
    }

    fn draw_text(&mut self, text: &str, rect: Rect, _font: &FontSpec, _color: Color, align: Align) {
        self.record(DrawOp::Text {
            text: text.to_string(),
            rect,
            align,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, _style: LineStyle) {
        self.record(DrawOp::Line { from, to });
    }

    fn draw_rect(&mut self, rect: Rect, _fill: Color) {
        self.record(DrawOp::Rect { rect });
    }

    fn draw_ellipse(&mut self, rect: Rect, _outline: Color, _fill: Color) {
        self.record(DrawOp::Ellipse { rect });
    }
}
