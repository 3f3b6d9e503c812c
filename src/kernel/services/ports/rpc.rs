//! Requests the view sends to the editing backend.

use serde::Serialize;
use serde_json::Value;

pub const REQUEST_LINES: &str = "request_lines";
pub const INSERT: &str = "insert";
pub const DELETE_BACKWARD: &str = "delete_backward";

/// Fire-and-forget channel to the backend. Nothing sent through it is
/// awaited or correlated with a reply; the backend applies requests in the
/// order received.
pub trait RpcSink {
    fn send_rpc_async(&self, method: &str, params: Value);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcNotification {
    pub method: String,
    pub params: Value,
}

impl RpcNotification {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Single-line JSON encoding, as written to the backend pipe.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/rpc.rs"]
mod tests;
