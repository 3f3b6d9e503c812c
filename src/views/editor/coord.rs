//! Screen-to-buffer coordinate mapping for the edit view.
//!
//! Line positions come from the fixed line height alone; columns are
//! recovered by hit-testing the cached line text through `TextLayout` and
//! converting the UTF-16 result back to a byte offset.

use crate::core::offset::{byte_to_utf16, utf16_to_byte};
use crate::models::LineCache;
use crate::ui::core::{Point, Rect, TextDrawingMetrics, TextLayout};
use std::ops::Range;

/// How far a visible window may reach below the known document.
pub const LINES_PAST_END: usize = 256;

/// Location in the document: line index plus byte column within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferPosition {
    pub line: usize,
    pub column: usize,
}

impl BufferPosition {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    metrics: TextDrawingMetrics,
    origin_x: f64,
}

impl CoordinateMapper {
    pub fn new(metrics: TextDrawingMetrics, origin_x: f64) -> Self {
        Self { metrics, origin_x }
    }

    pub fn metrics(&self) -> &TextDrawingMetrics {
        &self.metrics
    }

    pub fn set_metrics(&mut self, metrics: TextDrawingMetrics) {
        self.metrics = metrics;
    }

    /// X of the start of every line.
    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    pub fn line_height(&self) -> f64 {
        self.metrics.line_height
    }

    pub fn first_visible_line(&self, rect: Rect) -> usize {
        (rect.y / self.line_height()).floor().max(0.0) as usize
    }

    /// Exclusive upper bound of the visible window. May point past the end
    /// of the document.
    pub fn last_visible_line(&self, rect: Rect) -> usize {
        (rect.bottom() / self.line_height()).ceil().max(0.0) as usize
    }

    /// `[first, last)` lines of `rect`, with `last` capped at
    /// `LINES_PAST_END` lines below `max(first, height)`.
    pub fn visible_window(&self, rect: Rect, height: usize) -> Range<usize> {
        let first = self.first_visible_line(rect);
        let cap = first.max(height).saturating_add(LINES_PAST_END);
        first..self.last_visible_line(rect).min(cap)
    }

    pub fn line_baseline_y(&self, line: usize) -> f64 {
        (line + 1) as f64 * self.line_height()
    }

    /// Horizontal offset of byte `byte_ix` of `text`, relative to the line origin.
    pub fn x_for_byte(&self, layout: &dyn TextLayout, text: &str, byte_ix: usize) -> f64 {
        layout.offset_for_index(text, byte_to_utf16(text, byte_ix))
    }

    /// Lines that are not cached (including anything below the last line)
    /// resolve to column 0, as does a failed hit-test.
    pub fn point_to_buffer_position(
        &self,
        point: Point,
        cache: &LineCache,
        layout: &dyn TextLayout,
    ) -> BufferPosition {
        let y = (point.y - self.metrics.descent).max(0.0);
        let line = (y / self.line_height()).floor() as usize;

        let column = cache
            .get(line)
            .and_then(|l| {
                let ix = layout.index_for_offset(&l.text, point.x - self.origin_x)?;
                Some(utf16_to_byte(&l.text, ix))
            })
            .unwrap_or(0);

        BufferPosition { line, column }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/editor/coord.rs"]
mod tests;
