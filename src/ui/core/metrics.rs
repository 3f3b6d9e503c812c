//! Font metrics and the text-shaping seam.
//!
//! Every line has the same height: positions and hit-testing are derived from
//! `TextDrawingMetrics::line_height` alone.

use crate::core::offset::utf16_len;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Raw metrics of the active font, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontMetrics {
    pub ascent: f64,
    /// Distance below the baseline, positive.
    pub descent: f64,
    pub leading: f64,
    /// Advance of a single cell; only meaningful for monospace faces.
    pub advance: f64,
    pub monospace: bool,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            ascent: 13.0,
            descent: 4.0,
            leading: 0.0,
            advance: 8.0,
            monospace: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextDrawingMetrics {
    pub ascent: f64,
    pub descent: f64,
    pub leading: f64,
    pub line_height: f64,
    pub baseline: f64,
    /// Zero when the font is not monospace.
    pub fixed_advance: f64,
}

impl TextDrawingMetrics {
    pub fn from_font(font: &FontMetrics) -> Self {
        Self {
            ascent: font.ascent,
            descent: font.descent,
            leading: font.leading,
            line_height: (font.ascent + font.descent + font.leading).ceil().max(1.0),
            baseline: font.ascent.ceil(),
            fixed_advance: if font.monospace { font.advance } else { 0.0 },
        }
    }
}

impl Default for TextDrawingMetrics {
    fn default() -> Self {
        Self::from_font(&FontMetrics::default())
    }
}

/// Shaping and hit-testing for a single line. Indices are UTF-16 offsets.
pub trait TextLayout {
    /// Horizontal offset of `index` from the start of the line.
    fn offset_for_index(&self, text: &str, index: usize) -> f64;

    /// Caret index nearest to `x`, or `None` when the layout cannot resolve it.
    fn index_for_offset(&self, text: &str, x: f64) -> Option<usize>;
}

/// Cell-based layout for monospace faces: every grapheme occupies its
/// Unicode display width in cells, tabs advance to the next tab stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceLayout {
    advance: f64,
    tab_size: u8,
}

impl MonospaceLayout {
    pub fn new(advance: f64, tab_size: u8) -> Self {
        Self {
            advance,
            tab_size: tab_size.max(1),
        }
    }

    fn cell_width(&self, grapheme: &str, col: u32) -> u32 {
        if grapheme == "\t" {
            let tab = self.tab_size as u32;
            tab - col % tab
        } else {
            grapheme.width() as u32
        }
    }
}

fn is_line_break(grapheme: &str) -> bool {
    matches!(grapheme, "\n" | "\r\n" | "\r")
}

impl TextLayout for MonospaceLayout {
    fn offset_for_index(&self, text: &str, index: usize) -> f64 {
        let mut units = 0usize;
        let mut col = 0u32;
        for g in text.graphemes(true) {
            if is_line_break(g) {
                break;
            }
            let len = utf16_len(g);
            if units + len > index {
                break;
            }
            col += self.cell_width(g, col);
            units += len;
        }
        col as f64 * self.advance
    }

    fn index_for_offset(&self, text: &str, x: f64) -> Option<usize> {
        if !x.is_finite() || self.advance <= 0.0 {
            return None;
        }
        let target = x / self.advance;
        let mut units = 0usize;
        let mut col = 0u32;
        for g in text.graphemes(true) {
            if is_line_break(g) {
                break;
            }
            let w = self.cell_width(g, col);
            if col as f64 + w as f64 / 2.0 >= target {
                return Some(units);
            }
            col += w;
            units += utf16_len(g);
        }
        Some(units)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/metrics.rs"]
mod tests;
