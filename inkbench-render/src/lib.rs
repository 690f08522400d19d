#![warn(missing_docs)]
//! Inkbench Rendering Layer
//!
//! Everything between the report's numbers and its pixels:
//! - Geometry primitives and coordinate interpolation for chart axes
//! - The [`Surface`] trait, the paged 2-D drawing collaborator
//! - [`LayoutCursor`], the flowing write position that drives automatic
//!   pagination
//! - [`DocumentWriter`], titled blocks and inline flowing text on top of
//!   the cursor
//!
//! Two backends ship with the crate: [`SvgSurface`] renders each page as an
//! SVG element inside a single self-contained HTML file, and
//! [`RecordingSurface`] captures draw operations for assertions in tests.
//!
//! All layout state is owned by explicit objects; there is no ambient
//! document. Two documents can be built in the same process without
//! touching each other.

mod cursor;
mod geometry;
mod recording;
mod surface;
mod svg;
mod writer;

pub use cursor::{LayoutCursor, Margins, OffsetMode};
pub use geometry::{Point, Rect, Size, fraction, lerp};
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{Align, Color, FontSpec, HAlign, LineStyle, Surface, VAlign, approx_text_size};
pub use svg::{DocumentMeta, SvgSurface, A4};
pub use writer::DocumentWriter;

use thiserror::Error;

/// Errors raised by the rendering layer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A chart axis was asked to interpolate over a zero-width domain.
    /// Drawing would divide by zero and place every point on top of the
    /// others, so the build aborts instead.
    #[error("degenerate interpolation domain: min and max are both {min}")]
    DegenerateRange {
        /// Lower domain bound
        min: f64,
        /// Upper domain bound (equal to `min`)
        max: f64,
    },

    /// The assembled document could not be persisted.
    #[error("failed to persist document: {0}")]
    Io(#[from] std::io::Error),
}
