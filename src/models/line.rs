//! A single display line as pushed by the backend.

use serde::Deserialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub style: u32,
    /// Byte span within the line's text.
    pub range: Range<usize>,
}

impl StyleSpan {
    /// Style id reserved for the selection marker.
    pub const SELECTION: u32 = 0;

    pub fn new(style: u32, range: Range<usize>) -> Self {
        Self { style, range }
    }

    pub fn is_selection(&self) -> bool {
        self.style == Self::SELECTION
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Immutable once received; the cache replaces the whole value when the
/// backend resends the index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "WireLine")]
pub struct Line {
    pub text: String,
    pub styles: Vec<StyleSpan>,
    /// Caret byte offsets on this line.
    pub cursor: Vec<usize>,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Vec::new(),
            cursor: Vec::new(),
        }
    }

    pub fn with_styles(mut self, styles: Vec<StyleSpan>) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_cursor(mut self, cursor: Vec<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Byte length including any trailing line break.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn selection_spans(&self) -> impl Iterator<Item = &StyleSpan> {
        self.styles.iter().filter(|span| span.is_selection())
    }
}

/// Line as it appears on the wire: styles are flattened into
/// `[start_delta, len, style_id, ...]` triples, where each start is relative
/// to the end of the previous span.
#[derive(Deserialize)]
struct WireLine {
    text: String,
    #[serde(default)]
    styles: Vec<i64>,
    #[serde(default)]
    cursor: Vec<usize>,
}

impl TryFrom<WireLine> for Line {
    type Error = String;

    fn try_from(wire: WireLine) -> Result<Self, Self::Error> {
        if wire.styles.len() % 3 != 0 {
            return Err(format!(
                "style array length {} is not a multiple of 3",
                wire.styles.len()
            ));
        }

        let text_len = wire.text.len();
        let mut styles = Vec::with_capacity(wire.styles.len() / 3);
        let mut prev_end = 0i64;
        for triple in wire.styles.chunks_exact(3) {
            let (delta, len, style) = (triple[0], triple[1], triple[2]);
            if len < 0 || style < 0 {
                return Err(format!("invalid style triple {:?}", triple));
            }
            let start = prev_end.saturating_add(delta).max(0);
            let end = start.saturating_add(len);
            prev_end = end;

            let start = (start as usize).min(text_len);
            let end = (end as usize).min(text_len);
            styles.push(StyleSpan::new(style as u32, start..end));
        }

        let cursor = wire
            .cursor
            .into_iter()
            .map(|offset| offset.min(text_len))
            .collect();

        Ok(Line {
            text: wire.text,
            styles,
            cursor,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/line.rs"]
mod tests;
