use super::*;
use serde_json::json;

#[test]
fn channel_preserves_send_order() {
    let (sink, mut rx) = rpc_channel();
    sink.send_rpc_async("delete_backward", json!([]));
    sink.send_rpc_async("insert", json!({"chars": "x"}));

    let sent = rx.drain();
    assert_eq!(
        sent,
        vec![
            RpcNotification::new("delete_backward", json!([])),
            RpcNotification::new("insert", json!({"chars": "x"})),
        ]
    );
    assert!(rx.drain().is_empty());
}

#[test]
fn closed_channel_is_not_fatal() {
    let (sink, rx) = rpc_channel();
    drop(rx);
    sink.send_rpc_async("request_lines", json!([0, 10]));
}
