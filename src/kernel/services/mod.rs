//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the view.
//! - `adapters`: OS/runtime specific implementations (IO/channels).

pub mod adapters;
pub mod ports;
