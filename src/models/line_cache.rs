//! Display cache of the lines the backend has pushed so far.
//!
//! The cache never fetches anything itself. It answers which indices of a
//! visible window are absent so the view can ask the backend for them.

use super::line::Line;
use super::update::{Update, UpdateOp};
use crate::core::{Result, ViewError};

#[derive(Debug, Default, Clone)]
pub struct LineCache {
    lines: Vec<Option<Line>>,
}

impl LineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of document lines known so far (fetched or not).
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index).and_then(Option::as_ref)
    }

    /// Stores `line` at `index`, replacing whatever was there. Grows the cache
    /// with absent entries when `index` is past the current height.
    pub fn set_line(&mut self, index: usize, line: Line) {
        if index >= self.lines.len() {
            self.lines.resize_with(index + 1, || None);
        }
        self.lines[index] = Some(line);
    }

    /// Marks `[start, end)` as absent without changing the height.
    pub fn invalidate(&mut self, start: usize, end: usize) {
        let end = end.min(self.lines.len());
        for slot in self.lines.iter_mut().take(end).skip(start) {
            *slot = None;
        }
    }

    /// Half-open ranges inside `[first, last)` with no cached line. Adjacent
    /// gaps are coalesced; indices past the known height count as absent.
    pub fn compute_missing(&self, first: usize, last: usize) -> Vec<(usize, usize)> {
        let mut missing = Vec::new();
        let mut gap_start: Option<usize> = None;

        for ix in first..last {
            if self.get(ix).is_none() {
                gap_start.get_or_insert(ix);
            } else if let Some(start) = gap_start.take() {
                missing.push((start, ix));
            }
        }
        if let Some(start) = gap_start {
            missing.push((start, last));
        }

        missing
    }

    /// Absolute byte offset of the start of `index`. Absent lines contribute
    /// nothing; the next full push reconciles the difference.
    pub fn line_start_offset(&self, index: usize) -> usize {
        self.lines
            .iter()
            .take(index)
            .flatten()
            .map(Line::len)
            .sum()
    }

    /// Finds the cached line containing absolute byte `offset`, returning the
    /// line index and the offset relative to that line.
    pub fn locate_offset(&self, offset: usize) -> Option<(usize, usize)> {
        let mut running = 0usize;
        for (ix, slot) in self.lines.iter().enumerate() {
            let Some(line) = slot else {
                continue;
            };
            let end = running + line.len();
            if offset < end || (offset == end && ix + 1 == self.lines.len()) {
                return Some((ix, offset - running));
            }
            running = end;
        }
        None
    }

    /// Rebuilds the cache from its previous contents and `update`. On error
    /// the cache is left untouched.
    pub fn apply_update(&mut self, update: Update) -> Result<()> {
        let old = &self.lines;
        let mut new_lines: Vec<Option<Line>> = Vec::with_capacity(old.len());
        let mut old_ix = 0usize;

        for op in update.ops {
            match op {
                UpdateOp::Ins { lines } => {
                    new_lines.extend(lines.into_iter().map(Some));
                }
                UpdateOp::Copy { n } => {
                    let end = old_ix + n;
                    if end > old.len() {
                        return Err(ViewError::Protocol(format!(
                            "copy of {} lines at {} exceeds cache height {}",
                            n,
                            old_ix,
                            old.len()
                        )));
                    }
                    new_lines.extend_from_slice(&old[old_ix..end]);
                    old_ix = end;
                }
                UpdateOp::Skip { n } => {
                    let end = old_ix + n;
                    if end > old.len() {
                        return Err(ViewError::Protocol(format!(
                            "skip of {} lines at {} exceeds cache height {}",
                            n,
                            old_ix,
                            old.len()
                        )));
                    }
                    old_ix = end;
                }
                UpdateOp::Invalidate { n } => {
                    new_lines.resize_with(new_lines.len() + n, || None);
                }
            }
        }

        tracing::trace!(
            old_height = old.len(),
            new_height = new_lines.len(),
            "line cache updated"
        );
        self.lines = new_lines;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/line_cache.rs"]
mod tests;
