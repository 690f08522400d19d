//! Report Orchestration
//!
//! Walks one pass over the benchmark results and produces the whole
//! document: title page with table of contents, introduction page, then a
//! chart page and a distribution page per result.

use crate::ReportError;
use crate::analysis::{BenchmarkResult, ResultAnalysis, analyze};
use crate::charts::{draw_distribution_chart, draw_regression_chart};
use crate::style::{ACCENT, BODY_COLOR, BODY_FONT, SUBTITLE_FONT, TITLE_FONT};
use crate::text::enumeration_suffix;
use inkbench_render::{Align, DocumentWriter, Margins, Rect, Surface};

/// A table-of-contents entry with its remembered position, usable as a
/// link target by backends that support annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    /// Entry label as printed
    pub label: String,
    /// Page the entry was printed on
    pub page: usize,
    /// Vertical cursor offset of the entry on that page
    pub y: f64,
}

/// Generates one report document onto a surface.
///
/// The builder exclusively owns its layout state for the duration of one
/// [`build`](Self::build) call; independent builders never share anything,
/// so multiple documents can be produced in the same process.
#[derive(Debug)]
pub struct ReportBuilder<'a, S: Surface> {
    writer: DocumentWriter<'a, S>,
    toc: Vec<TocEntry>,
}

impl<'a, S: Surface> ReportBuilder<'a, S> {
    /// A builder with the default 60-unit margins.
    pub fn new(surface: &'a mut S) -> Self {
        Self::with_margins(surface, Margins::default())
    }

    /// A builder with explicit margins.
    pub fn with_margins(surface: &'a mut S, margins: Margins) -> Self {
        Self {
            writer: DocumentWriter::new(surface, margins),
            toc: Vec::new(),
        }
    }

    /// Table-of-contents entries recorded during the last build.
    pub fn toc_entries(&self) -> &[TocEntry] {
        &self.toc
    }

    /// Generate the full document for `results`, in order.
    ///
    /// All numeric analysis runs before the first page is drawn, so
    /// degenerate input aborts the build early. Returns the analyses for
    /// the caller's own use (console output, JSON companion).
    pub fn build(
        &mut self,
        results: &[BenchmarkResult],
    ) -> Result<Vec<ResultAnalysis>, ReportError> {
        let analyses: Vec<ResultAnalysis> =
            results.iter().map(analyze).collect::<Result<_, _>>()?;

        self.title_page(results);
        self.introduction_page(results);
        for (index, analysis) in analyses.iter().enumerate() {
            self.result_pages(analysis, index)?;
        }
        Ok(analyses)
    }

    fn heading_rect(&self, height: f64) -> Rect {
        let margins = self.writer.cursor().margins();
        Rect::new(
            margins.x,
            margins.y,
            self.writer.cursor().printable_width(),
            height,
        )
    }

    fn toc_line(&mut self, label: String) {
        self.toc.push(TocEntry {
            label: label.clone(),
            page: self.writer.cursor().page_index().unwrap_or(0),
            y: self.writer.cursor().y_offset(),
        });
        let rect = self.heading_rect(10.0);
        self.writer
            .write_block(&label, rect, &BODY_FONT, BODY_COLOR, Align::CenterLeft, 2.0, true);
    }

    fn title_page(&mut self, results: &[BenchmarkResult]) {
        let rect = self.heading_rect(20.0);
        self.writer.write_block(
            "Benchmarking report",
            rect,
            &TITLE_FONT,
            ACCENT,
            Align::Center,
            25.0,
            true,
        );

        let rect = self.heading_rect(10.0);
        self.writer
            .write_block("Contents", rect, &SUBTITLE_FONT, ACCENT, Align::CenterLeft, 10.0, true);

        self.toc_line("Introduction".to_string());
        for result in results {
            self.toc_line(format!("Data analysis of {}", result.title));
        }
        self.toc_line("Compared data".to_string());
        self.toc_line("Conclusion".to_string());
    }

    fn introduction_page(&mut self, results: &[BenchmarkResult]) {
        self.writer.new_page();
        let rect = self.heading_rect(10.0);
        self.writer.write_block(
            "Introduction",
            rect,
            &SUBTITLE_FONT,
            ACCENT,
            Align::CenterLeft,
            10.0,
            true,
        );

        // One flowing sentence enumerating every title, wrapping inline
        // when the line fills.
        let margins = self.writer.cursor().margins();
        for (i, result) in results.iter().enumerate() {
            let mut chunk = if i == 0 {
                format!("Benchmarking test of {}", result.title)
            } else {
                result.title.clone()
            };
            chunk.push_str(enumeration_suffix(i, results.len()));

            let size = self.writer.measure(&chunk, &BODY_FONT);
            let rect = Rect::new(margins.x, margins.y, size.width, 10.0);
            self.writer.write_inline(
                &chunk,
                rect,
                &BODY_FONT,
                BODY_COLOR,
                Align::CenterLeft,
                0.0,
                true,
                10.0,
            );
        }
    }

    fn result_pages(&mut self, analysis: &ResultAnalysis, index: usize) -> Result<(), ReportError> {
        self.writer.new_page();
        let rect = self.heading_rect(10.0);
        self.writer.write_block(
            &format!("Data analysis of {}", analysis.title),
            rect,
            &SUBTITLE_FONT,
            ACCENT,
            Align::CenterLeft,
            10.0,
            true,
        );

        let rect = self.heading_rect(10.0);
        self.writer.write_block(
            &format!(
                "Graph {} shows the execution time(ms) as a function of your codes' iterations.",
                1 + index * 2
            ),
            rect,
            &BODY_FONT,
            BODY_COLOR,
            Align::CenterLeft,
            3.0,
            true,
        );
        let rect = self.heading_rect(10.0);
        self.writer.write_block(
            &format!("Graph {} shows the time distribution of your code.", 2 + index * 2),
            rect,
            &BODY_FONT,
            BODY_COLOR,
            Align::CenterLeft,
            3.0,
            true,
        );

        draw_regression_chart(&mut self.writer, analysis, 1 + index * 2)?;

        self.writer.new_page();
        draw_distribution_chart(&mut self.writer, analysis)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkbench_render::RecordingSurface;

    fn result(title: &str, samples: Vec<u64>) -> BenchmarkResult {
        BenchmarkResult::new(title, samples)
    }

    #[test]
    fn test_single_result_page_layout() {
        let mut surface = RecordingSurface::a4();
        let mut builder = ReportBuilder::new(&mut surface);
        let analyses = builder.build(&[result("A", vec![1, 2, 3])]).unwrap();

        assert_eq!(analyses.len(), 1);
        // Title+TOC, introduction, chart page, distribution page.
        assert_eq!(surface.page_count(), 4);

        let title_page = surface.page_text(0);
        assert!(title_page.contains("Benchmarking report"));
        assert!(title_page.contains("Contents"));
        assert!(title_page.contains("Data analysis of A"));
        assert!(title_page.contains("Compared data"));
        assert!(title_page.contains("Conclusion"));

        let intro = surface.page_text(1);
        assert!(intro.contains("Benchmarking test of A."));

        let chart = surface.page_text(2);
        assert!(chart.contains("Graph 1 shows the execution time(ms)"));
        assert!(chart.contains("Graph 1, f(x) = 2.5x"));
    }

    #[test]
    fn test_toc_entries_remember_positions() {
        let mut surface = RecordingSurface::a4();
        let mut builder = ReportBuilder::new(&mut surface);
        builder
            .build(&[result("A", vec![1, 2, 3]), result("B", vec![2, 4, 6])])
            .unwrap();

        let toc = builder.toc_entries();
        // Introduction + one per result + Compared data + Conclusion.
        assert_eq!(toc.len(), 5);
        assert_eq!(toc[0].label, "Introduction");
        assert_eq!(toc[1].label, "Data analysis of A");
        assert_eq!(toc[4].label, "Conclusion");
        // All on the title page, strictly descending down the page.
        for pair in toc.windows(2) {
            assert_eq!(pair[0].page, 0);
            assert!(pair[0].y < pair[1].y);
        }
    }

    #[test]
    fn test_intro_sentence_joins_titles() {
        let mut surface = RecordingSurface::a4();
        let mut builder = ReportBuilder::new(&mut surface);
        builder
            .build(&[
                result("A", vec![1, 2, 3]),
                result("B", vec![2, 4, 6]),
                result("C", vec![1, 3, 5]),
            ])
            .unwrap();

        let intro = surface.page_text(1).replace('\n', "");
        assert!(intro.contains("Benchmarking test of A, B and C."));
    }

    #[test]
    fn test_two_pages_per_result() {
        let mut surface = RecordingSurface::a4();
        let mut builder = ReportBuilder::new(&mut surface);
        builder
            .build(&[result("A", vec![1, 2, 3]), result("B", vec![5, 1, 5, 1])])
            .unwrap();
        assert_eq!(surface.page_count(), 2 + 2 * 2);
    }

    #[test]
    fn test_failing_analysis_aborts_before_drawing() {
        let mut surface = RecordingSurface::a4();
        let mut builder = ReportBuilder::new(&mut surface);
        let err = builder.build(&[result("empty", vec![])]);
        assert!(err.is_err());
        // Nothing was drawn: the failure precedes page creation.
        assert_eq!(surface.page_count(), 0);
    }
}
