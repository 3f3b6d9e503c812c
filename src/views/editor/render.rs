//! Two-pass drawing of the visible line window.
//!
//! Pass 1 fills selection backgrounds and derives the selected range from
//! the selection spans. Pass 2 draws text, the marked-text underline and
//! carets. Both passes only look at lines already in the cache; absent
//! lines are skipped and contribute no bytes to the running offset.

use super::coord::CoordinateMapper;
use crate::core::offset::byte_to_utf16;
use crate::models::{Line, LineCache, MarkedRange, SelectedRange, StyleSpan};
use crate::ui::core::{Color, Painter, Point, Rect, TextLayout};

pub struct RenderPlanner<'a> {
    cache: &'a LineCache,
    mapper: &'a CoordinateMapper,
    layout: &'a dyn TextLayout,
    marked: MarkedRange,
    caret_visible: bool,
    selection_color: Color,
    caret_color: Color,
}

impl<'a> RenderPlanner<'a> {
    pub fn new(
        cache: &'a LineCache,
        mapper: &'a CoordinateMapper,
        layout: &'a dyn TextLayout,
    ) -> Self {
        Self {
            cache,
            mapper,
            layout,
            marked: MarkedRange::NONE,
            caret_visible: true,
            selection_color: Color::gray(0xdc),
            caret_color: Color::BLACK,
        }
    }

    pub fn marked(mut self, marked: MarkedRange) -> Self {
        self.marked = marked;
        self
    }

    pub fn caret_visible(mut self, visible: bool) -> Self {
        self.caret_visible = visible;
        self
    }

    pub fn colors(mut self, selection: Color, caret: Color) -> Self {
        self.selection_color = selection;
        self.caret_color = caret;
        self
    }

    /// Draws lines `[first, last)` into `painter` and returns the selection
    /// derived from them. The result is a projection of the pushed line data
    /// for this frame only.
    pub fn draw(&self, first: usize, last: usize, painter: &mut Painter) -> SelectedRange {
        let start = self.cache.line_start_offset(first);
        let selected = self.draw_selection(first, last, start, painter);
        let selected = self.draw_text(first, last, start, selected, painter);
        tracing::trace!(first, last, selected = ?selected.start, "draw");
        selected
    }

    fn draw_selection(
        &self,
        first: usize,
        last: usize,
        start: usize,
        painter: &mut Painter,
    ) -> SelectedRange {
        let metrics = self.mapper.metrics();
        let mut selected = SelectedRange::NONE;
        let mut running = start;

        for ix in first..last {
            let Some(line) = self.cache.get(ix) else {
                continue;
            };
            let top = self.mapper.line_baseline_y(ix) - metrics.ascent;
            for span in line.selection_spans() {
                let x0 = self.mapper.x_for_byte(self.layout, &line.text, span.range.start);
                let x1 = self.mapper.x_for_byte(self.layout, &line.text, span.range.end);
                let rect = Rect::new(
                    self.mapper.origin_x() + x0,
                    top,
                    x1 - x0,
                    metrics.line_height,
                );
                painter.fill_rect(rect, self.selection_color);
                selected = SelectedRange::new(running + span.range.start, span.len());
            }
            running += line.len();
        }

        selected
    }

    fn draw_text(
        &self,
        first: usize,
        last: usize,
        start: usize,
        mut selected: SelectedRange,
        painter: &mut Painter,
    ) -> SelectedRange {
        let metrics = self.mapper.metrics();
        let x0 = self.mapper.origin_x();
        let mut running = start;

        for ix in first..last {
            let Some(line) = self.cache.get(ix) else {
                continue;
            };
            let baseline = self.mapper.line_baseline_y(ix);
            let origin = Point::new(x0, baseline);

            let styles: Vec<StyleSpan> = line
                .styles
                .iter()
                .filter(|span| !span.is_selection())
                .cloned()
                .collect();
            painter.text(ix, origin, line.text.as_str(), styles);

            if !line.cursor.is_empty() {
                self.underline_marked(ix, line, running, origin, painter);
            }

            for &caret in &line.cursor {
                if selected.is_none() {
                    selected = SelectedRange::new(running + caret, 0);
                }
                if self.caret_visible {
                    let x = if caret == 0 {
                        0.0
                    } else {
                        self.mapper.x_for_byte(self.layout, &line.text, caret)
                    };
                    painter.line(
                        Point::new(x0 + x, baseline + metrics.descent),
                        Point::new(x0 + x, baseline - metrics.ascent),
                        self.caret_color,
                    );
                }
            }

            running += line.len();
        }

        selected
    }

    fn underline_marked(
        &self,
        ix: usize,
        line: &Line,
        running: usize,
        origin: Point,
        painter: &mut Painter,
    ) {
        let Some(start) = self.marked.start else {
            return;
        };
        if self.marked.length == 0 || start < running || start > running + line.len() {
            return;
        }

        let rel_start = start - running;
        let rel_end = rel_start + self.marked.length;
        // The backend may not have confirmed the composed text yet.
        if rel_end > line.len() {
            tracing::debug!(
                line = ix,
                rel_end,
                len = line.len(),
                "marked range past line end, skipping underline"
            );
            return;
        }

        let range = byte_to_utf16(&line.text, rel_start)..byte_to_utf16(&line.text, rel_end);
        painter.underline(ix, origin, range);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/editor/render.rs"]
mod tests;
