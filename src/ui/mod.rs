//! Drawing primitives the view plans into.
//!
//! Nothing here talks to a real graphics API: the host replays the collected
//! `PaintCmd`s onto whatever surface it owns.

pub mod core;
