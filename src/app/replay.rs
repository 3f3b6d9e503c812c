//! Headless host for an `EditView`.
//!
//! A script is JSON lines, one host event per line, e.g.
//! `{"event":"redraw","y":0,"height":200}`. Blank lines and lines starting
//! with `#` are ignored.

use crate::core::{Result, ViewError};
use crate::kernel::services::ports::RpcSink;
use crate::models::{Line, Update};
use crate::ui::core::{FontMetrics, Point, Rect};
use crate::views::editor::{CommandOutcome, EditView, TextInputClient};
use serde::Deserialize;
use std::io::Write;
use std::ops::Range;
use std::time::Instant;

const DEFAULT_VIEW_WIDTH: f64 = 800.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Font(FontMetrics),
    Update(Update),
    SetLine {
        index: usize,
        line: Line,
    },
    Focus {
        focused: bool,
    },
    Redraw {
        y: f64,
        height: f64,
        #[serde(default)]
        x: f64,
        #[serde(default = "default_width")]
        width: f64,
    },
    Insert {
        text: String,
        #[serde(default)]
        replacement: Option<[usize; 2]>,
    },
    SetMarked {
        text: String,
        #[serde(default)]
        selected: Option<[usize; 2]>,
        #[serde(default)]
        replacement: Option<[usize; 2]>,
    },
    Unmark,
    RemoveMarked,
    Command {
        selector: String,
    },
    Click {
        x: f64,
        y: f64,
    },
    Blink,
}

fn default_width() -> f64 {
    DEFAULT_VIEW_WIDTH
}

fn to_range(pair: [usize; 2]) -> Range<usize> {
    pair[0]..pair[1].max(pair[0])
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>> {
    let mut events = Vec::new();
    for (ix, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line)
            .map_err(|e| ViewError::Protocol(format!("script line {}: {e}", ix + 1)))?;
        events.push(event);
    }
    Ok(events)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Report paint commands of every redraw.
    pub paint: bool,
}

pub struct Replay<S: RpcSink> {
    view: EditView<S>,
    options: ReplayOptions,
    /// Rect of the last `redraw`, repainted when the caret blinks.
    last_dirty: Option<Rect>,
}

impl<S: RpcSink> Replay<S> {
    pub fn new(view: EditView<S>, options: ReplayOptions) -> Self {
        Self {
            view,
            options,
            last_dirty: None,
        }
    }

    pub fn view(&self) -> &EditView<S> {
        &self.view
    }

    /// Feeds one event to the view. Anything the host would show (paint
    /// commands, hit-test results, command outcomes) goes to `report`.
    pub fn apply(&mut self, event: ScriptEvent, report: &mut dyn Write) -> Result<()> {
        tracing::trace!(?event, "replay event");
        match event {
            ScriptEvent::Font(font) => self.view.set_font(&font),
            ScriptEvent::Update(update) => self.view.apply_update(update)?,
            ScriptEvent::SetLine { index, line } => self.view.set_line(index, line),
            ScriptEvent::Focus { focused } => self.view.set_focused(focused, Instant::now()),
            ScriptEvent::Redraw {
                y,
                height,
                x,
                width,
            } => self.redraw(Rect::new(x, y, width, height), report)?,
            ScriptEvent::Insert { text, replacement } => {
                self.view.insert_text(&text, replacement.map(to_range));
            }
            ScriptEvent::SetMarked {
                text,
                selected,
                replacement,
            } => {
                let selected = selected.map_or(text.len()..text.len(), to_range);
                self.view
                    .set_marked_text(&text, selected, replacement.map(to_range));
            }
            ScriptEvent::Unmark => self.view.unmark_text(),
            ScriptEvent::RemoveMarked => self.view.remove_marked_text(),
            ScriptEvent::Command { selector } => match self.view.do_command(&selector) {
                CommandOutcome::Native(cmd) => writeln!(report, "native {cmd:?}")?,
                CommandOutcome::Forwarded(name) => writeln!(report, "forwarded {name}")?,
                CommandOutcome::Beep => writeln!(report, "beep")?,
            },
            ScriptEvent::Click { x, y } => {
                let pos = self.view.point_to_buffer_position(Point::new(x, y));
                writeln!(report, "click line={} column={}", pos.line, pos.column)?;
            }
            ScriptEvent::Blink => self.blink_tick(Instant::now(), report)?,
        }
        Ok(())
    }

    /// Toggles the caret and, when it changed, repaints the last dirty rect.
    pub fn blink_tick(&mut self, now: Instant, report: &mut dyn Write) -> Result<()> {
        if !self.view.on_blink_tick(now) {
            return Ok(());
        }
        match self.last_dirty {
            Some(dirty) => self.redraw(dirty, report),
            None => Ok(()),
        }
    }

    fn redraw(&mut self, dirty: Rect, report: &mut dyn Write) -> Result<()> {
        self.last_dirty = Some(dirty);
        let cmds = self.view.redraw(dirty);
        if self.options.paint {
            for cmd in cmds {
                writeln!(report, "paint {cmd:?}")?;
            }
        }
        Ok(())
    }

    pub fn run(&mut self, events: Vec<ScriptEvent>, report: &mut dyn Write) -> Result<()> {
        for event in events {
            self.apply(event, report)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/replay.rs"]
mod tests;
