//! Service ports: traits + data contracts.

pub mod config;
pub mod rpc;

pub use config::{ViewColors, ViewConfig};
pub use rpc::{RpcNotification, RpcSink};
