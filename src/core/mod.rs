//! Core utilities shared by every layer: error type and offset conversion.

pub mod error;
pub mod offset;

pub use error::{Result, ViewError};
