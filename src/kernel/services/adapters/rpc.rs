//! In-process backend channel: requests are queued on an mpsc channel and
//! drained by whoever owns the transport to the backend process.

use crate::kernel::services::ports::{RpcNotification, RpcSink};
use serde_json::Value;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Clone)]
pub struct ChannelRpcSink {
    tx: Sender<RpcNotification>,
}

pub struct RpcReceiver {
    rx: Receiver<RpcNotification>,
}

pub fn rpc_channel() -> (ChannelRpcSink, RpcReceiver) {
    let (tx, rx) = mpsc::channel();
    (ChannelRpcSink { tx }, RpcReceiver { rx })
}

impl RpcSink for ChannelRpcSink {
    fn send_rpc_async(&self, method: &str, params: Value) {
        tracing::trace!(method, %params, "rpc");
        if self.tx.send(RpcNotification::new(method, params)).is_err() {
            tracing::warn!(method, "backend channel closed, dropping request");
        }
    }
}

impl RpcReceiver {
    /// Everything queued so far, in send order.
    pub fn drain(&mut self) -> Vec<RpcNotification> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/rpc.rs"]
mod tests;
