use super::*;
use serde_json::json;

#[test]
fn notification_encodes_as_single_json_line() {
    let msg = RpcNotification::new(REQUEST_LINES, json!([5, 20]));
    let line = msg.to_json_line().unwrap();
    assert!(!line.contains('\n'));
    let decoded: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(decoded, json!({"method": "request_lines", "params": [5, 20]}));
}

#[test]
fn insert_params_carry_chars() {
    let msg = RpcNotification::new(INSERT, json!({"chars": "a\"b"}));
    assert_eq!(
        msg.to_json_line().unwrap(),
        r#"{"method":"insert","params":{"chars":"a\"b"}}"#
    );
}
