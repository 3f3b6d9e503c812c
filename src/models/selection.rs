//! Selection and composition ranges, in absolute document byte offsets.
//!
//! `SelectedRange` is re-derived from line data on every draw; `MarkedRange`
//! is owned by the edit session. They are kept as distinct types so a derived
//! selection cannot be mistaken for session state.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedRange {
    pub start: Option<usize>,
    pub length: usize,
}

impl SelectedRange {
    pub const NONE: Self = Self {
        start: None,
        length: 0,
    };

    pub const fn new(start: usize, length: usize) -> Self {
        Self {
            start: Some(start),
            length,
        }
    }

    pub fn is_none(&self) -> bool {
        self.start.is_none()
    }

    pub fn as_range(&self) -> Option<Range<usize>> {
        self.start.map(|start| start..start + self.length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkedRange {
    pub start: Option<usize>,
    pub length: usize,
}

impl MarkedRange {
    pub const NONE: Self = Self {
        start: None,
        length: 0,
    };

    pub const fn new(start: usize, length: usize) -> Self {
        Self {
            start: Some(start),
            length,
        }
    }

    pub fn is_none(&self) -> bool {
        self.start.is_none()
    }

    pub fn as_range(&self) -> Option<Range<usize>> {
        self.start.map(|start| start..start + self.length)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
