//! IME and selection state for the edit view.
//!
//! The session never touches the line cache. Every replacement is sent to
//! the backend as one `delete_backward` per byte of the replaced range,
//! followed by a single `insert`; the next pushed update shows the result.

use crate::kernel::services::ports::rpc::{DELETE_BACKWARD, INSERT};
use crate::kernel::services::ports::RpcSink;
use crate::models::{MarkedRange, SelectedRange};
use crate::ui::core::Rect;
use serde_json::json;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Composing,
}

/// Callbacks a platform text-input system drives. All ranges are absolute
/// document byte offsets.
pub trait TextInputClient {
    fn insert_text(&mut self, text: &str, replacement: Option<Range<usize>>);

    /// `selected` is the caret or selection inside `text`, in bytes.
    fn set_marked_text(
        &mut self,
        text: &str,
        selected: Range<usize>,
        replacement: Option<Range<usize>>,
    );

    fn remove_marked_text(&mut self);
    fn unmark_text(&mut self);
    fn selected_range(&self) -> SelectedRange;
    fn marked_range(&self) -> MarkedRange;
    fn has_marked_text(&self) -> bool;
    fn attributed_substring(&self, range: Range<usize>) -> Option<String>;
    fn first_rect_for_range(&self, range: Range<usize>) -> Rect;
}

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    selected: SelectedRange,
    marked: MarkedRange,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            selected: SelectedRange::NONE,
            marked: MarkedRange::NONE,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.has_marked_text() {
            SessionState::Composing
        } else {
            SessionState::Idle
        }
    }

    pub fn selected_range(&self) -> SelectedRange {
        self.selected
    }

    pub fn marked_range(&self) -> MarkedRange {
        self.marked
    }

    pub fn has_marked_text(&self) -> bool {
        !self.marked.is_none()
    }

    /// Replaces the selection with the one derived by the last draw.
    pub fn sync_selection(&mut self, selected: SelectedRange) {
        self.selected = selected;
    }

    /// Range the next edit replaces: an explicit replacement, else the
    /// composition, else the selection. With none of them known the edit
    /// lands at the document start.
    pub fn resolve_target(&self, replacement: Option<Range<usize>>) -> Range<usize> {
        if let Some(range) = replacement {
            return range;
        }
        if let Some(range) = self.marked.as_range() {
            return range;
        }
        self.selected.as_range().unwrap_or(0..0)
    }

    pub fn insert_text(
        &mut self,
        rpc: &dyn RpcSink,
        text: &str,
        replacement: Option<Range<usize>>,
    ) {
        let target = self.resolve_target(replacement);
        replace(rpc, target.len(), text);

        self.marked = MarkedRange::NONE;
        self.selected = SelectedRange::new(target.start + text.len(), 0);
        tracing::debug!(deleted = target.len(), inserted = text.len(), "insert text");
    }

    pub fn set_marked_text(
        &mut self,
        rpc: &dyn RpcSink,
        text: &str,
        selected: Range<usize>,
        replacement: Option<Range<usize>>,
    ) {
        let target = self.resolve_target(replacement);
        replace(rpc, target.len(), text);

        if text.is_empty() {
            self.marked = MarkedRange::NONE;
            self.selected = SelectedRange::new(target.start, 0);
        } else {
            let sel_start = selected.start.min(text.len());
            let sel_end = selected.end.clamp(sel_start, text.len());
            self.marked = MarkedRange::new(target.start, text.len());
            self.selected = SelectedRange::new(target.start + sel_start, sel_end - sel_start);
        }
        tracing::debug!(
            deleted = target.len(),
            marked = ?self.marked.as_range(),
            "set marked text"
        );
    }

    pub fn remove_marked_text(&mut self, rpc: &dyn RpcSink) {
        let Some(range) = self.marked.as_range() else {
            return;
        };
        delete_backward(rpc, range.len());
        self.marked = MarkedRange::NONE;
        self.selected = SelectedRange::new(range.start, 0);
    }

    pub fn unmark_text(&mut self) {
        self.marked = MarkedRange::NONE;
    }
}

fn delete_backward(rpc: &dyn RpcSink, count: usize) {
    for _ in 0..count {
        rpc.send_rpc_async(DELETE_BACKWARD, json!([]));
    }
}

/// Always ends with exactly one `insert`, even for empty `text`.
fn replace(rpc: &dyn RpcSink, deleted: usize, text: &str) {
    delete_backward(rpc, deleted);
    rpc.send_rpc_async(INSERT, json!({ "chars": text }));
}

#[cfg(test)]
#[path = "../../../tests/unit/views/editor/edit.rs"]
mod tests;
