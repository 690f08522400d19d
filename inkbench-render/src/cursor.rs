//! Layout Cursor
//!
//! Tracks the flowing write position on the current page and decides when
//! content must wrap to a new line or spill onto a new page. The cursor is
//! an explicit object owned by whoever builds a document; there is no
//! process-wide layout state, so independent documents never interfere.

use crate::geometry::{Rect, Size};
use crate::surface::Surface;

/// Printable-area margins, in page units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Horizontal margin on both edges
    pub x: f64,
    /// Vertical margin on both edges
    pub y: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { x: 60.0, y: 60.0 }
    }
}

/// Which cursor offsets are applied to a candidate rectangle.
///
/// Callers that position content relative to the flowing cursor use
/// [`OffsetMode::Both`]. Callers that bake the vertical position into the
/// rectangle themselves use [`OffsetMode::HorizontalOnly`], which still
/// participates in the inline wrap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetMode {
    /// Apply both the horizontal and vertical cursor offsets
    Both,
    /// Apply only the horizontal offset
    HorizontalOnly,
}

/// Flowing write position over a paged surface.
///
/// The cursor holds offsets relative to the page's margin origin; pages
/// themselves are owned by the [`Surface`]. Offsets reset to zero whenever
/// a new page is created.
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    page: Option<usize>,
    x_offset: f64,
    y_offset: f64,
    page_size: Size,
    margins: Margins,
}

impl LayoutCursor {
    /// A cursor for pages of `page_size` with the given margins.
    ///
    /// No page exists yet; the first write or [`advance`](Self::advance)
    /// creates one.
    pub fn new(page_size: Size, margins: Margins) -> Self {
        Self {
            page: None,
            x_offset: 0.0,
            y_offset: 0.0,
            page_size,
            margins,
        }
    }

    /// Index of the current page, if one exists.
    pub fn page_index(&self) -> Option<usize> {
        self.page
    }

    /// Horizontal offset from the margin origin.
    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    /// Vertical offset from the margin origin.
    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }

    /// Configured margins.
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Width of the printable area.
    pub fn printable_width(&self) -> f64 {
        self.page_size.width - 2.0 * self.margins.x
    }

    /// Height of the printable area.
    pub fn printable_height(&self) -> f64 {
        self.page_size.height - 2.0 * self.margins.y
    }

    /// Create a fresh page unconditionally and reset both offsets.
    pub fn new_page(&mut self, surface: &mut dyn Surface) {
        self.page = Some(surface.new_page());
        self.x_offset = 0.0;
        self.y_offset = 0.0;
    }

    /// Move the cursor down by `height`, resetting any accumulated
    /// horizontal offset. Creates the first page if none exists.
    pub fn advance(&mut self, surface: &mut dyn Surface, height: f64) {
        self.ensure_page(surface);
        self.y_offset += height;
        self.x_offset = 0.0;
    }

    /// Move the cursor right by `width` without touching the vertical
    /// position.
    pub fn advance_inline(&mut self, width: f64) {
        self.x_offset += width;
    }

    /// Reset the horizontal offset to the margin origin.
    pub fn reset_inline(&mut self) {
        self.x_offset = 0.0;
    }

    /// Check a candidate placement against the printable area and resolve
    /// overflow. Returns the rectangle actually available for the write,
    /// with the requested offsets applied.
    ///
    /// Two independent checks run, vertical first:
    /// 1. The candidate's bottom edge past the printable extent creates a
    ///    new page; the candidate is recomputed against the reset cursor,
    ///    so the write lands at the top of the fresh page.
    /// 2. The candidate's right edge past the printable extent wraps: the
    ///    horizontal offset resets and the vertical offset advances by
    ///    `line_spacing`. No page is created.
    ///
    /// When both would trigger at once, the page break is resolved first
    /// and the wrap check then runs against the fresh offsets.
    pub fn require_rect(
        &mut self,
        surface: &mut dyn Surface,
        rect: Rect,
        mode: OffsetMode,
        line_spacing: f64,
    ) -> Rect {
        self.ensure_page(surface);

        let mut candidate = self.apply_offsets(rect, mode);

        let printable_bottom = self.page_size.height - self.margins.y;
        if candidate.bottom() > printable_bottom {
            self.new_page(surface);
            candidate = self.apply_offsets(rect, mode);
        }

        let printable_right = self.page_size.width - self.margins.x;
        if candidate.right() > printable_right {
            self.x_offset = 0.0;
            self.y_offset += line_spacing;
            candidate = self.apply_offsets(rect, mode);
        }

        candidate
    }

    fn apply_offsets(&self, rect: Rect, mode: OffsetMode) -> Rect {
        match mode {
            OffsetMode::Both => rect.translated(self.x_offset, self.y_offset),
            OffsetMode::HorizontalOnly => rect.translated(self.x_offset, 0.0),
        }
    }

    fn ensure_page(&mut self, surface: &mut dyn Surface) {
        if self.page.is_none() {
            self.new_page(surface);
        }
    }
}
