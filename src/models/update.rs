//! View update messages the backend sends to refresh the line cache.

use super::line::Line;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum UpdateOp {
    /// New lines, inserted at the current position of the new cache.
    Ins { lines: Vec<Line> },
    /// Carry over `n` lines from the old cache.
    Copy { n: usize },
    /// Drop `n` lines of the old cache.
    Skip { n: usize },
    /// `n` lines that exist in the document but whose content is not sent.
    Invalidate { n: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Update {
    pub ops: Vec<UpdateOp>,
    #[serde(default)]
    pub pristine: bool,
}

impl Update {
    pub fn new(ops: Vec<UpdateOp>) -> Self {
        Self {
            ops,
            pristine: false,
        }
    }
}
