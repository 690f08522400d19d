//! Paged SVG Backend
//!
//! Renders every page as an `<svg>` element inside one self-contained HTML
//! file, so the finished report is a single artifact that opens anywhere.

use crate::geometry::{Point, Rect, Size};
use crate::surface::{Align, Color, FontSpec, HAlign, LineStyle, Surface, VAlign, approx_text_size};
use crate::RenderError;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::path::Path;

/// A4 page size in points.
pub const A4: Size = Size::new(595.0, 842.0);

/// Document identity stamped into the output file header.
#[derive(Debug, Clone)]
pub struct DocumentMeta {
    /// Document title
    pub title: String,
    /// Author line
    pub author: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl DocumentMeta {
    /// Metadata stamped with the current time.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            created: Utc::now(),
        }
    }
}

/// SVG-in-HTML drawing surface.
///
/// Each page accumulates SVG elements; [`save`](SvgSurface::save) writes
/// the whole document in one shot. Nothing touches the filesystem before
/// that, so a failed report build persists nothing.
#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    meta: DocumentMeta,
    pages: Vec<String>,
}

impl SvgSurface {
    /// A surface with the given page size.
    pub fn new(size: Size, meta: DocumentMeta) -> Self {
        Self {
            size,
            meta,
            pages: Vec::new(),
        }
    }

    /// A surface with A4 pages.
    pub fn a4(meta: DocumentMeta) -> Self {
        Self::new(A4, meta)
    }

    /// Document metadata.
    pub fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    /// Render the complete document as an HTML string.
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        let _ = writeln!(out, "<meta charset=\"utf-8\">");
        let _ = writeln!(out, "<title>{}</title>", escape(&self.meta.title));
        let _ = writeln!(
            out,
            "<meta name=\"author\" content=\"{}\">",
            escape(&self.meta.author)
        );
        let _ = writeln!(
            out,
            "<meta name=\"created\" content=\"{}\">",
            self.meta.created.to_rfc3339()
        );
        out.push_str(
            "<style>body{background:#888;margin:0;padding:16px}\
             svg{background:#fff;display:block;margin:0 auto 16px;\
             box-shadow:0 1px 4px rgba(0,0,0,.4)}</style>\n",
        );
        out.push_str("</head>\n<body>\n");
        for body in &self.pages {
            let _ = writeln!(
                out,
                "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" \
                 xmlns=\"http://www.w3.org/2000/svg\">",
                self.size.width, self.size.height, self.size.width, self.size.height
            );
            out.push_str(body);
            out.push_str("</svg>\n");
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    /// Persist the document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        std::fs::write(path, self.render_html())?;
        Ok(())
    }

    fn current_page(&mut self) -> &mut String {
        if self.pages.is_empty() {
            self.pages.push(String::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl Surface for SvgSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn new_page(&mut self) -> usize {
        self.pages.push(String::new());
        self.pages.len() - 1
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> Size {
        approx_text_size(text, font)
    }

    fn draw_text(&mut self, text: &str, rect: Rect, font: &FontSpec, color: Color, align: Align) {
        let (x, anchor) = match align.horizontal() {
            HAlign::Left => (rect.x, "start"),
            HAlign::Center => (rect.x + rect.width / 2.0, "middle"),
            HAlign::Right => (rect.right(), "end"),
        };
        // SVG positions text by baseline; approximate ascent as 0.8em.
        let y = match align.vertical() {
            VAlign::Top => rect.y + font.size * 0.8,
            VAlign::Center => rect.y + rect.height / 2.0 + font.size * 0.3,
            VAlign::Bottom => rect.bottom(),
        };
        let family = font.family;
        let size = font.size;
        let fill = color.to_hex();
        let body = self.current_page();
        let _ = writeln!(
            body,
            "<text x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"{family}\" \
             font-size=\"{size}\" fill=\"{fill}\" text-anchor=\"{anchor}\">{}</text>",
            escape(text)
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, style: LineStyle) {
        let stroke = style.color.to_hex();
        let width = style.width;
        let body = self.current_page();
        let _ = writeln!(
            body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" \
             stroke=\"{stroke}\" stroke-width=\"{width}\"/>",
            from.x, from.y, to.x, to.y
        );
    }

    fn draw_rect(&mut self, rect: Rect, fill: Color) {
        let fill = fill.to_hex();
        let body = self.current_page();
        let _ = writeln!(
            body,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{fill}\"/>",
            rect.x, rect.y, rect.width, rect.height
        );
    }

    fn draw_ellipse(&mut self, rect: Rect, outline: Color, fill: Color) {
        let center = rect.center();
        let stroke = outline.to_hex();
        let fill = fill.to_hex();
        let body = self.current_page();
        let _ = writeln!(
            body,
            "<ellipse cx=\"{:.2}\" cy=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\" \
             stroke=\"{stroke}\" fill=\"{fill}\"/>",
            center.x,
            center.y,
            rect.width / 2.0,
            rect.height / 2.0
        );
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
