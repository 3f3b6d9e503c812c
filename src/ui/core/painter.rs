use super::color::Color;
use super::geom::{Point, Rect};
use crate::models::StyleSpan;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub enum PaintCmd {
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// Shape `text` and draw it with its baseline origin at `origin`. Style
    /// spans are byte ranges and are applied by the host's style map.
    Text {
        line: usize,
        origin: Point,
        text: String,
        styles: Vec<StyleSpan>,
    },
    /// Underline a UTF-16 range of the text previously drawn for `line`.
    Underline {
        line: usize,
        origin: Point,
        range: Range<usize>,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(PaintCmd::FillRect { rect, color });
    }

    pub fn text(
        &mut self,
        line: usize,
        origin: Point,
        text: impl Into<String>,
        styles: Vec<StyleSpan>,
    ) {
        self.cmds.push(PaintCmd::Text {
            line,
            origin,
            text: text.into(),
            styles,
        });
    }

    pub fn underline(&mut self, line: usize, origin: Point, range: Range<usize>) {
        self.cmds.push(PaintCmd::Underline {
            line,
            origin,
            range,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, color: Color) {
        self.cmds.push(PaintCmd::Line { from, to, color });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
