//! 视图层

pub mod editor;
