//! Chart Drawing
//!
//! Builds both chart kinds from raw surface primitives positioned by
//! linear interpolation of data coordinates into page coordinates. The
//! flowing-text layer is bypassed here; charts are placed against the
//! cursor position directly, the way the rest of the page flow expects.

use crate::ReportError;
use crate::analysis::ResultAnalysis;
use crate::style::{
    BODY_COLOR, BODY_FONT, MARKER_SIZE, PLOT_BACKGROUND, PLOT_HEIGHT, SUMMARY_LINE,
    SUPERSCRIPT_FONT,
};
use crate::text::{format_equation, join_with_and, times_word};
use inkbench_render::{
    Align, Color, DocumentWriter, LineStyle, Point, Rect, Surface, fraction, lerp,
};

/// Quartile fractions at which grid lines and tick labels sit.
const TICK_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Vertical gap between the plot area and the summary text below it.
const SUMMARY_GAP: f64 = 50.0;

/// Draw the cumulative-time chart with its regression overlay and textual
/// summary block. The plot area sits at the current cursor position.
pub(crate) fn draw_regression_chart<S: Surface>(
    writer: &mut DocumentWriter<'_, S>,
    analysis: &ResultAnalysis,
    graph_number: usize,
) -> Result<(), ReportError> {
    let area = plot_area(writer);
    let fit = &analysis.regression;
    let n = analysis.runs as f64;
    let total = analysis.cumulative.last().copied().unwrap_or(0.0);

    // Vertical domain: cumulative values measured from the intercept. The
    // span stretches to cover the trend line's right endpoint when the fit
    // overshoots the data.
    let span = (total - fit.intercept).max(fit.slope * n);

    // Project every point before drawing anything, so a degenerate domain
    // aborts with a clean page.
    let mut points = Vec::with_capacity(analysis.cumulative.len());
    for (j, &cumulative) in analysis.cumulative.iter().enumerate() {
        let x = lerp(area.x, area.right(), (j + 1) as f64 / n);
        let y = area.bottom() - PLOT_HEIGHT * fraction(cumulative - fit.intercept, 0.0, span)?;
        points.push(Point::new(x, y));
    }
    let trend_end_y = area.bottom() - PLOT_HEIGHT * fraction(fit.slope * n, 0.0, span)?;

    let surface = writer.surface();
    draw_plot_frame(surface, area);
    draw_x_labels(surface, area, 0.0, n);
    draw_y_labels(surface, area, fit.intercept, fit.intercept + span, "");

    surface.draw_line(
        Point::new(area.x, area.bottom()),
        Point::new(area.right(), trend_end_y),
        LineStyle::solid(Color::RED),
    );
    for point in &points {
        draw_marker(surface, *point);
    }

    draw_regression_summary(surface, area, analysis, graph_number);
    Ok(())
}

fn draw_regression_summary<S: Surface>(
    surface: &mut S,
    area: Rect,
    analysis: &ResultAnalysis,
    graph_number: usize,
) {
    let fit = &analysis.regression;
    let x = area.x;
    let top = area.bottom() + SUMMARY_GAP;
    let line = |i: usize| top + SUMMARY_LINE * i as f64;

    label(
        surface,
        &format!(
            "Graph {}, f(x) = {}",
            graph_number,
            format_equation(fit.slope, fit.intercept)
        ),
        x,
        line(0),
        Align::CenterLeft,
    );

    label(
        surface,
        &format!("R  = {:.4}", fit.r_squared),
        x,
        line(1),
        Align::CenterLeft,
    );
    superscript(surface, x + 8.0, line(1) - 4.0);

    label(surface, &format!("Sum(x) = {}", fit.sum_x), x, line(3), Align::CenterLeft);
    label(surface, &format!("Sum(y) = {}", fit.sum_y), x, line(4), Align::CenterLeft);
    label(surface, &format!("Sum(x  ) = {}", fit.sum_xx), x, line(5), Align::CenterLeft);
    superscript(surface, x + 34.0, line(5) - 4.0);
    label(surface, &format!("Sum(y  ) = {}", fit.sum_yy), x, line(6), Align::CenterLeft);
    superscript(surface, x + 34.0, line(6) - 4.0);
    label(surface, &format!("Sum(xy) = {}", fit.sum_xy), x, line(7), Align::CenterLeft);

    label(
        surface,
        &format!(
            "Average execution time (pr. iteration): {}ms.",
            analysis.average_per_iteration.round()
        ),
        x,
        line(9),
        Align::CenterLeft,
    );
    let explained = (fit.r_squared * 1000.0).round() / 10.0;
    let unexplained = ((1.0 - fit.r_squared) * 1000.0).round() / 10.0;
    label(
        surface,
        &format!("{explained}% of the variation in y is explained by the variation in x."),
        x,
        line(10),
        Align::CenterLeft,
    );
    label(
        surface,
        &format!("Leaving {unexplained}% of the variation in y unexplained."),
        x,
        line(11),
        Align::CenterLeft,
    );
}

/// Draw the execution-time distribution as a connected step chart with a
/// caption naming the most- and least-frequent values.
///
/// Gap filling is an explicit two-pass algorithm: first enumerate the
/// polyline vertices, inserting synthetic baseline points where
/// consecutive sorted values are non-adjacent, then draw the segments, and
/// finally place markers at real data points only.
pub(crate) fn draw_distribution_chart<S: Surface>(
    writer: &mut DocumentWriter<'_, S>,
    analysis: &ResultAnalysis,
) -> Result<(), ReportError> {
    let area = plot_area(writer);
    let dist = &analysis.distribution;
    let min_value = dist.min_value() as f64;
    let max_value = dist.max_value() as f64;
    let max_count = dist.max_count() as f64;
    let top_percent = max_count / analysis.runs as f64 * 100.0;

    let project_x = |value: f64| -> Result<f64, ReportError> {
        Ok(lerp(
            area.x,
            area.right(),
            fraction(value, min_value, max_value)?,
        ))
    };
    let project_y = |count: u64| area.bottom() - PLOT_HEIGHT * (count as f64 / max_count);

    // Pass 1: vertex enumeration. Consecutive values exactly one apart
    // connect directly; a wider gap drops to the baseline one unit after
    // the previous value and stays grounded until one unit before the
    // next.
    let pairs = dist.pairs();
    let mut vertices: Vec<Point> = Vec::with_capacity(pairs.len());
    let mut data_points: Vec<Point> = Vec::with_capacity(pairs.len());
    for (idx, &(value, count)) in pairs.iter().enumerate() {
        if idx > 0 {
            let (prev_value, _) = pairs[idx - 1];
            if value - prev_value > 1 {
                vertices.push(Point::new(project_x((prev_value + 1) as f64)?, area.bottom()));
                vertices.push(Point::new(project_x((value - 1) as f64)?, area.bottom()));
            }
        }
        let point = Point::new(project_x(value as f64)?, project_y(count));
        vertices.push(point);
        data_points.push(point);
    }

    let surface = writer.surface();
    draw_plot_frame(surface, area);
    draw_x_labels(surface, area, min_value, max_value);
    draw_y_labels(surface, area, 0.0, top_percent, "%");

    // Pass 2: connect the polyline, then mark real data points.
    for pair in vertices.windows(2) {
        surface.draw_line(pair[0], pair[1], LineStyle::solid(Color::BLACK));
    }
    for point in &data_points {
        draw_marker(surface, *point);
    }

    let caption_top = area.bottom() + SUMMARY_GAP;
    label(
        surface,
        &format!(
            "Most frequently occurring number is {}ms, occurring {} {}",
            join_with_and(&analysis.most_frequent),
            dist.max_count(),
            times_word(dist.max_count())
        ),
        area.x,
        caption_top,
        Align::CenterLeft,
    );
    label(
        surface,
        &format!(
            "Least frequently occurring number is {}ms, occurring {} {}",
            join_with_and(&analysis.least_frequent),
            dist.min_count(),
            times_word(dist.min_count())
        ),
        area.x,
        caption_top + 12.0,
        Align::CenterLeft,
    );
    Ok(())
}

/// Plot area anchored at the current cursor position, spanning the
/// printable width.
fn plot_area<S: Surface>(writer: &DocumentWriter<'_, S>) -> Rect {
    let margins = writer.cursor().margins();
    Rect::new(
        margins.x,
        margins.y + writer.cursor().y_offset(),
        writer.page_size().width - 2.0 * margins.x,
        PLOT_HEIGHT,
    )
}

fn draw_plot_frame<S: Surface>(surface: &mut S, area: Rect) {
    surface.draw_rect(area, PLOT_BACKGROUND);
    let grid = LineStyle::solid(Color::LIGHT_GRAY);
    for f in [0.25, 0.5, 0.75] {
        let x = lerp(area.x, area.right(), f);
        surface.draw_line(Point::new(x, area.y), Point::new(x, area.bottom()), grid);
        let y = lerp(area.y, area.bottom(), f);
        surface.draw_line(Point::new(area.x, y), Point::new(area.right(), y), grid);
    }
}

/// Tick labels under the x-axis, reading left to right from `min` to `max`.
fn draw_x_labels<S: Surface>(surface: &mut S, area: Rect, min: f64, max: f64) {
    for f in TICK_FRACTIONS {
        let value = lerp(min, max, f).round();
        let x = lerp(area.x, area.right(), f);
        label(
            surface,
            &format!("{value}"),
            x,
            area.bottom() + 12.0,
            Align::Center,
        );
    }
}

/// Tick labels left of the y-axis; fraction 0 is the bottom of the plot.
fn draw_y_labels<S: Surface>(surface: &mut S, area: Rect, min: f64, max: f64, suffix: &str) {
    for f in TICK_FRACTIONS {
        let value = lerp(min, max, f).round();
        let y = area.bottom() - PLOT_HEIGHT * f;
        label(
            surface,
            &format!("{value}{suffix}"),
            area.x - 12.0,
            y,
            Align::CenterRight,
        );
    }
}

fn draw_marker<S: Surface>(surface: &mut S, center: Point) {
    surface.draw_ellipse(
        Rect::new(
            center.x - MARKER_SIZE / 2.0,
            center.y - MARKER_SIZE / 2.0,
            MARKER_SIZE,
            MARKER_SIZE,
        ),
        Color::BLACK,
        Color::RED,
    );
}

/// Draw text anchored at a point, the anchor side given by `align`.
fn label<S: Surface>(surface: &mut S, text: &str, x: f64, y: f64, align: Align) {
    let rect = match align {
        Align::CenterRight => Rect::new(x - 200.0, y - 7.0, 200.0, 14.0),
        Align::Center => Rect::new(x - 60.0, y - 7.0, 120.0, 14.0),
        _ => Rect::new(x, y - 7.0, 400.0, 14.0),
    };
    surface.draw_text(text, rect, &BODY_FONT, BODY_COLOR, align);
}

/// Small raised "2" next to a squared symbol.
fn superscript<S: Surface>(surface: &mut S, x: f64, y: f64) {
    surface.draw_text(
        "2",
        Rect::new(x, y - 5.0, 10.0, 10.0),
        &SUPERSCRIPT_FONT,
        BODY_COLOR,
        Align::CenterLeft,
    );
}
