//! 编辑视图模块

mod blink;
mod command;
mod coord;
mod edit;
mod edit_view;
mod render;

pub use blink::{BlinkDriver, BlinkTick, BlinkTimer, CursorBlinkScheduler};
pub use command::{command_name, translate, CommandOutcome, NativeCommand};
pub use coord::{BufferPosition, CoordinateMapper, LINES_PAST_END};
pub use edit::{EditSession, SessionState, TextInputClient};
pub use edit_view::{EditView, Palette};
pub use render::RenderPlanner;
