//! 编辑视图：行缓存 + 坐标映射 + 渲染 + 输入会话
//!
//! The view owns no document text. It caches what the backend pushed,
//! asks for what is missing on every redraw, and turns text input into
//! backend requests.

use super::blink::{BlinkDriver, BlinkTimer, CursorBlinkScheduler};
use super::command::{self, CommandOutcome, NativeCommand};
use super::coord::{BufferPosition, CoordinateMapper};
use super::edit::{EditSession, TextInputClient};
use super::render::RenderPlanner;
use crate::core::offset::content_len;
use crate::core::Result;
use crate::kernel::services::ports::rpc::REQUEST_LINES;
use crate::kernel::services::ports::{RpcSink, ViewColors, ViewConfig};
use crate::models::{Line, LineCache, MarkedRange, SelectedRange, Update};
use crate::ui::core::{
    Color, FontMetrics, MonospaceLayout, PaintCmd, Painter, Point, Rect, TextDrawingMetrics,
    TextLayout,
};
use serde_json::json;
use std::ops::Range;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub selection_focused: Color,
    pub selection_unfocused: Color,
    pub caret: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            selection_focused: Color::rgb(0xb3, 0xd7, 0xff),
            selection_unfocused: Color::gray(0xdc),
            caret: Color::BLACK,
        }
    }
}

impl Palette {
    pub fn from_colors(colors: &ViewColors) -> Self {
        let defaults = Self::default();
        Self {
            selection_focused: parse_color(&colors.selection_focused, defaults.selection_focused),
            selection_unfocused: parse_color(
                &colors.selection_unfocused,
                defaults.selection_unfocused,
            ),
            caret: parse_color(&colors.caret, defaults.caret),
        }
    }
}

/// Cell layout driven by the font's fixed advance. Proportional fonts have
/// none, so cells fall back to the nominal advance until the host installs a
/// real layout.
fn builtin_layout(
    font: &FontMetrics,
    metrics: &TextDrawingMetrics,
    tab_size: u8,
) -> Box<dyn TextLayout> {
    let advance = if metrics.fixed_advance > 0.0 {
        metrics.fixed_advance
    } else {
        tracing::debug!(advance = font.advance, "proportional font without host layout");
        font.advance
    };
    Box::new(MonospaceLayout::new(advance, tab_size))
}

fn parse_color(value: &str, fallback: Color) -> Color {
    Color::from_hex(value).unwrap_or_else(|| {
        tracing::warn!(value, "invalid color, using default");
        fallback
    })
}

pub struct EditView<S: RpcSink> {
    rpc: S,
    cache: LineCache,
    mapper: CoordinateMapper,
    layout: Box<dyn TextLayout>,
    /// Set once the host installs its own layout; font changes keep it.
    host_layout: bool,
    tab_size: u8,
    session: EditSession,
    blink: CursorBlinkScheduler,
    blink_driver: Option<BlinkDriver>,
    blink_timer: Option<BlinkTimer>,
    palette: Palette,
    focused: bool,
    painter: Painter,
}

impl<S: RpcSink> EditView<S> {
    pub fn new(rpc: S, config: &ViewConfig) -> Self {
        let metrics = TextDrawingMetrics::from_font(&config.font);
        Self {
            rpc,
            cache: LineCache::new(),
            mapper: CoordinateMapper::new(metrics, config.text_origin_x),
            layout: builtin_layout(&config.font, &metrics, config.tab_size),
            host_layout: false,
            tab_size: config.tab_size,
            session: EditSession::new(),
            blink: CursorBlinkScheduler::new(config.blink_interval()),
            blink_driver: None,
            blink_timer: None,
            palette: Palette::from_colors(&config.colors),
            focused: false,
            painter: Painter::new(),
        }
    }

    /// Runs a blink timer while focused instead of relying on `poll_blink`.
    pub fn with_blink_driver(mut self, driver: BlinkDriver) -> Self {
        self.blink_driver = Some(driver);
        self
    }

    pub fn cache(&self) -> &LineCache {
        &self.cache
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn caret_visible(&self) -> bool {
        self.blink.is_visible()
    }

    /// Replaces the shaping backend, e.g. with a proportional layout.
    pub fn set_layout(&mut self, layout: Box<dyn TextLayout>) {
        self.layout = layout;
        self.host_layout = true;
    }

    pub fn apply_update(&mut self, update: Update) -> Result<()> {
        self.cache.apply_update(update)
    }

    pub fn set_line(&mut self, index: usize, line: Line) {
        self.cache.set_line(index, line);
    }

    pub fn set_font(&mut self, font: &FontMetrics) {
        let metrics = TextDrawingMetrics::from_font(font);
        tracing::debug!(line_height = metrics.line_height, "font changed");
        if !self.host_layout {
            self.layout = builtin_layout(font, &metrics, self.tab_size);
        }
        self.mapper.set_metrics(metrics);
    }

    pub fn set_focused(&mut self, focused: bool, now: Instant) {
        self.focused = focused;
        if focused {
            self.blink.enable(now);
            self.blink_timer = self
                .blink_driver
                .as_ref()
                .map(|driver| driver.start(self.blink.interval()));
        } else {
            self.blink.disable();
            self.blink_timer = None;
        }
    }

    /// Requests lines missing from the dirty window, then draws whatever is
    /// cached. Never waits for the backend.
    pub fn redraw(&mut self, dirty: Rect) -> &[PaintCmd] {
        self.painter.clear();
        if dirty.is_empty() {
            return self.painter.cmds();
        }

        let Range { start: first, end: last } =
            self.mapper.visible_window(dirty, self.cache.height());
        self.request_missing(first, last);

        let selection = if self.focused {
            self.palette.selection_focused
        } else {
            self.palette.selection_unfocused
        };

        let selected = RenderPlanner::new(&self.cache, &self.mapper, self.layout.as_ref())
            .marked(self.session.marked_range())
            .caret_visible(self.blink.is_visible())
            .colors(selection, self.palette.caret)
            .draw(first, last, &mut self.painter);
        self.session.sync_selection(selected);

        self.painter.cmds()
    }

    fn request_missing(&self, first: usize, last: usize) {
        for (start, end) in self.cache.compute_missing(first, last) {
            tracing::debug!(start, end, "request missing lines");
            self.rpc.send_rpc_async(REQUEST_LINES, json!([start, end]));
        }
    }

    pub fn point_to_buffer_position(&self, point: Point) -> BufferPosition {
        self.mapper
            .point_to_buffer_position(point, &self.cache, self.layout.as_ref())
    }

    pub fn do_command(&mut self, selector: &str) -> CommandOutcome {
        let outcome = command::translate(selector);
        match &outcome {
            CommandOutcome::Forwarded(name) => {
                self.rpc.send_rpc_async(name, json!([]));
                self.touch_blink();
            }
            CommandOutcome::Native(NativeCommand::CancelOperation) => {
                if self.session.has_marked_text() {
                    self.session.unmark_text();
                }
            }
            CommandOutcome::Native(_) => {}
            CommandOutcome::Beep => {
                tracing::debug!(selector, "beep");
            }
        }
        outcome
    }

    /// Handles a tick from the blink timer. Returns whether to redraw.
    pub fn on_blink_tick(&mut self, now: Instant) -> bool {
        self.blink.toggle(now)
    }

    /// Polling alternative to the blink timer.
    pub fn poll_blink(&mut self, now: Instant) -> bool {
        self.blink.poll(now)
    }

    fn touch_blink(&mut self) {
        if self.focused {
            self.blink.reset(Instant::now());
        }
    }

    fn caret_line(&self) -> usize {
        self.session
            .selected_range()
            .start
            .and_then(|offset| self.cache.locate_offset(offset))
            .map_or(0, |(ix, _)| ix)
    }
}

impl<S: RpcSink> TextInputClient for EditView<S> {
    fn insert_text(&mut self, text: &str, replacement: Option<Range<usize>>) {
        self.session.insert_text(&self.rpc, text, replacement);
        self.touch_blink();
    }

    fn set_marked_text(
        &mut self,
        text: &str,
        selected: Range<usize>,
        replacement: Option<Range<usize>>,
    ) {
        self.session
            .set_marked_text(&self.rpc, text, selected, replacement);
        self.touch_blink();
    }

    fn remove_marked_text(&mut self) {
        self.session.remove_marked_text(&self.rpc);
        self.touch_blink();
    }

    fn unmark_text(&mut self) {
        self.session.unmark_text();
    }

    fn selected_range(&self) -> SelectedRange {
        self.session.selected_range()
    }

    fn marked_range(&self) -> MarkedRange {
        self.session.marked_range()
    }

    fn has_marked_text(&self) -> bool {
        self.session.has_marked_text()
    }

    fn attributed_substring(&self, range: Range<usize>) -> Option<String> {
        let (ix, rel) = self.cache.locate_offset(range.start)?;
        let line = self.cache.get(ix)?;
        let end = rel.checked_add(range.len())?;
        line.text.get(rel..end).map(str::to_string)
    }

    fn first_rect_for_range(&self, range: Range<usize>) -> Rect {
        let metrics = self.mapper.metrics();
        let located = self
            .cache
            .locate_offset(range.start)
            .and_then(|(ix, rel)| Some((ix, rel, self.cache.get(ix)?)));

        let Some((ix, rel, line)) = located else {
            let top = self.mapper.line_baseline_y(self.caret_line()) - metrics.ascent;
            return Rect::new(self.mapper.origin_x(), top, 0.0, metrics.line_height);
        };

        let end = rel.saturating_add(range.len()).min(content_len(&line.text));
        let x0 = self.mapper.x_for_byte(self.layout.as_ref(), &line.text, rel);
        let x1 = self.mapper.x_for_byte(self.layout.as_ref(), &line.text, end);
        Rect::new(
            self.mapper.origin_x() + x0,
            self.mapper.line_baseline_y(ix) - metrics.ascent,
            x1 - x0,
            metrics.line_height,
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/editor/edit_view.rs"]
mod tests;
