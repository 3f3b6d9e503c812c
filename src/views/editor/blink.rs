//! Caret blinking.
//!
//! `CursorBlinkScheduler` holds the visible flag and is advanced either by
//! polling from the host's tick or by `BlinkTick` messages from a
//! `BlinkTimer` task. The timer is owned by the view's focus lifecycle and
//! stops when dropped.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone)]
pub struct CursorBlinkScheduler {
    interval: Duration,
    enabled: bool,
    visible: bool,
    last_toggle: Instant,
}

impl CursorBlinkScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            enabled: false,
            visible: false,
            last_toggle: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Starts blinking with the caret shown. Safe to call while already
    /// enabled; it restarts the period.
    pub fn enable(&mut self, now: Instant) {
        self.enabled = true;
        self.visible = true;
        self.last_toggle = now;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.visible = false;
    }

    /// Shows the caret again after it moved or text changed.
    pub fn reset(&mut self, now: Instant) {
        if self.enabled {
            self.enable(now);
        }
    }

    /// Flips the flag. Returns whether a redraw is needed.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        self.visible = !self.visible;
        self.last_toggle = now;
        true
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        if now.saturating_duration_since(self.last_toggle) >= self.interval {
            return self.toggle(now);
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTick;

/// Where blink timers run and where their ticks go.
#[derive(Clone)]
pub struct BlinkDriver {
    handle: Handle,
    tx: Sender<BlinkTick>,
}

impl BlinkDriver {
    pub fn new(handle: Handle, tx: Sender<BlinkTick>) -> Self {
        Self { handle, tx }
    }

    pub fn start(&self, period: Duration) -> BlinkTimer {
        BlinkTimer::start(&self.handle, period, self.tx.clone())
    }
}

/// Periodic task sending a `BlinkTick` every `period`. Aborted on drop.
pub struct BlinkTimer {
    task: JoinHandle<()>,
}

impl BlinkTimer {
    pub fn start(handle: &Handle, period: Duration, tx: Sender<BlinkTick>) -> Self {
        let period = period.max(Duration::from_millis(1));
        let task = handle.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(BlinkTick).is_err() {
                    tracing::debug!("blink receiver gone, stopping timer");
                    break;
                }
            }
        });
        Self { task }
    }
}

impl Drop for BlinkTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/editor/blink.rs"]
mod tests;
