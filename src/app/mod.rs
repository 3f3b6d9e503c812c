//! 应用层：脚本回放驱动

pub mod replay;

pub use replay::{parse_script, Replay, ReplayOptions, ScriptEvent};
