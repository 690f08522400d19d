//! Document Writer
//!
//! Text placement on top of the layout cursor: single-column flowing
//! blocks and inline runs that fill a line and wrap. Chart code uses the
//! underlying surface directly; the writer only owns the flowing-text
//! contract.

use crate::cursor::{LayoutCursor, Margins, OffsetMode};
use crate::geometry::{Rect, Size};
use crate::surface::{Align, Color, FontSpec, Surface};

/// Composes a [`LayoutCursor`] with a [`Surface`] to produce one logical
/// document.
#[derive(Debug)]
pub struct DocumentWriter<'a, S: Surface> {
    surface: &'a mut S,
    cursor: LayoutCursor,
}

impl<'a, S: Surface> DocumentWriter<'a, S> {
    /// A writer over `surface` with the given margins.
    pub fn new(surface: &'a mut S, margins: Margins) -> Self {
        let cursor = LayoutCursor::new(surface.page_size(), margins);
        Self { surface, cursor }
    }

    /// The layout cursor, for reading the current write position.
    pub fn cursor(&self) -> &LayoutCursor {
        &self.cursor
    }

    /// The underlying surface, for drawing chart primitives that bypass
    /// the flowing-text layer.
    pub fn surface(&mut self) -> &mut S {
        self.surface
    }

    /// Size of every page.
    pub fn page_size(&self) -> Size {
        self.surface.page_size()
    }

    /// Measure `text` in `font` on the underlying surface.
    pub fn measure(&self, text: &str, font: &FontSpec) -> Size {
        self.surface.measure_text(text, font)
    }

    /// Start a fresh page.
    pub fn new_page(&mut self) {
        self.cursor.new_page(self.surface);
    }

    /// Move the flowing cursor down by `height`.
    pub fn advance(&mut self, height: f64) {
        self.cursor.advance(self.surface, height);
    }

    /// Write a single-column text block.
    ///
    /// `rect` is relative to the flowing cursor. The block requires its
    /// space first (possibly spilling onto a new page), draws `text`
    /// aligned within the resolved rectangle, and, when `advance_cursor`
    /// is set, moves the vertical cursor down by the rect's height plus
    /// `trailing_gap`. The horizontal offset always resets: blocks flow
    /// in one column.
    #[allow(clippy::too_many_arguments)]
    pub fn write_block(
        &mut self,
        text: &str,
        rect: Rect,
        font: &FontSpec,
        color: Color,
        align: Align,
        trailing_gap: f64,
        advance_cursor: bool,
    ) {
        let placed = self
            .cursor
            .require_rect(self.surface, rect, OffsetMode::Both, 0.0);
        self.surface.draw_text(text, placed, font, color, align);
        if advance_cursor {
            self.cursor.advance(self.surface, rect.height + trailing_gap);
        } else {
            self.cursor.reset_inline();
        }
    }

    /// Write an inline text run.
    ///
    /// Same space/draw contract as [`write_block`](Self::write_block), but
    /// the cursor advances horizontally by the rect's width plus
    /// `trailing_gap` instead of vertically. When the line fills, the
    /// cursor wraps via the horizontal-overflow path, dropping down by
    /// `line_spacing`.
    #[allow(clippy::too_many_arguments)]
    pub fn write_inline(
        &mut self,
        text: &str,
        rect: Rect,
        font: &FontSpec,
        color: Color,
        align: Align,
        trailing_gap: f64,
        advance_cursor: bool,
        line_spacing: f64,
    ) {
        let placed = self
            .cursor
            .require_rect(self.surface, rect, OffsetMode::Both, line_spacing);
        self.surface.draw_text(text, placed, font, color, align);
        if advance_cursor {
            self.cursor.advance_inline(rect.width + trailing_gap);
        }
    }
}
