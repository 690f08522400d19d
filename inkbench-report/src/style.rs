//! Report Typography and Palette

use inkbench_render::{Color, FontSpec};

pub(crate) const TITLE_FONT: FontSpec = FontSpec::new("Helvetica", 22.0);
pub(crate) const SUBTITLE_FONT: FontSpec = FontSpec::new("Helvetica", 14.0);
pub(crate) const BODY_FONT: FontSpec = FontSpec::new("Helvetica", 12.0);
pub(crate) const SUPERSCRIPT_FONT: FontSpec = FontSpec::new("Helvetica", 8.0);

pub(crate) const ACCENT: Color = Color::rgb(68, 114, 196);
pub(crate) const BODY_COLOR: Color = Color::BLACK;
pub(crate) const PLOT_BACKGROUND: Color = Color::rgb(233, 239, 242);

/// Height of every chart's plot area.
pub(crate) const PLOT_HEIGHT: f64 = 250.0;
/// Diameter of scatter/step markers.
pub(crate) const MARKER_SIZE: f64 = 4.0;
/// Line height of the summary text under a chart.
pub(crate) const SUMMARY_LINE: f64 = 14.0;
