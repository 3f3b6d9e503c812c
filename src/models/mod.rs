//! 数据模型层

pub mod line;
pub mod line_cache;
pub mod selection;
pub mod update;

pub use line::{Line, StyleSpan};
pub use line_cache::LineCache;
pub use selection::{MarkedRange, SelectedRange};
pub use update::{Update, UpdateOp};
