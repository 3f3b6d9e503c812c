use super::*;
use crate::kernel::services::adapters::{rpc_channel, ChannelRpcSink, RpcReceiver};
use crate::kernel::services::ports::ViewConfig;
use crate::models::SelectedRange;
use serde_json::json;

fn replay(options: ReplayOptions) -> (Replay<ChannelRpcSink>, RpcReceiver) {
    let (sink, rx) = rpc_channel();
    let view = EditView::new(sink, &ViewConfig::default());
    (Replay::new(view, options), rx)
}

fn report_text(report: Vec<u8>) -> String {
    String::from_utf8(report).unwrap()
}

#[test]
fn parses_events_and_skips_comments() {
    let script = r#"
# warm up
{"event":"font","ascent":15,"descent":4,"leading":1,"advance":10}
{"event":"update","ops":[{"op":"ins","lines":[{"text":"hi\n","cursor":[2]}]}]}
{"event":"redraw","y":0,"height":100}

{"event":"set_marked","text":"ka"}
{"event":"unmark"}
{"event":"command","selector":"insertNewline:"}
"#;
    let events = parse_script(script).unwrap();
    assert_eq!(events.len(), 6);
    assert!(matches!(events[0], ScriptEvent::Font(f) if f.ascent == 15.0 && f.monospace));
    assert!(matches!(
        events[2],
        ScriptEvent::Redraw { width, x, .. } if width == 800.0 && x == 0.0
    ));
    assert_eq!(events[4], ScriptEvent::Unmark);
}

#[test]
fn bad_line_reports_its_number() {
    let err = parse_script("{\"event\":\"unmark\"}\n{\"event\":\"warp\"}\n").unwrap_err();
    match err {
        ViewError::Protocol(msg) => assert!(msg.starts_with("script line 2:"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn replay_drives_view_and_backend_requests() {
    let (mut replay, mut rx) = replay(ReplayOptions::default());
    let script = r#"
{"event":"focus","focused":true}
{"event":"set_line","index":0,"line":{"text":"abc\n","cursor":[3]}}
{"event":"redraw","y":0,"height":34}
{"event":"insert","text":"d"}
{"event":"command","selector":"deleteBackward:"}
{"event":"command","selector":"noop:"}
"#;
    let mut report = Vec::new();
    replay.run(parse_script(script).unwrap(), &mut report).unwrap();

    let sent: Vec<_> = rx
        .drain()
        .into_iter()
        .map(|n| (n.method, n.params))
        .collect();
    assert_eq!(
        sent,
        vec![
            ("request_lines".to_string(), json!([1, 2])),
            ("insert".to_string(), json!({"chars": "d"})),
            ("delete_backward".to_string(), json!([])),
        ]
    );
    assert_eq!(report_text(report), "forwarded delete_backward\nbeep\n");
    assert_eq!(replay.view().selected_range(), SelectedRange::new(4, 0));
}

#[test]
fn paint_option_reports_commands() {
    let (mut replay, _rx) = replay(ReplayOptions { paint: true });
    let script = r#"
{"event":"set_line","index":0,"line":{"text":"abc\n"}}
{"event":"redraw","y":0,"height":17}
{"event":"click","x":17,"y":10}
"#;
    let mut report = Vec::new();
    replay.run(parse_script(script).unwrap(), &mut report).unwrap();

    let text = report_text(report);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("paint Text"));
    assert_eq!(lines[1], "click line=0 column=2");
}

#[test]
fn blink_repaints_last_dirty_rect_without_caret() {
    let (mut replay, _rx) = replay(ReplayOptions { paint: true });
    let script = r#"
{"event":"focus","focused":true}
{"event":"set_line","index":0,"line":{"text":"abc\n","cursor":[1]}}
{"event":"redraw","y":0,"height":17}
"#;
    let mut report = Vec::new();
    replay.run(parse_script(script).unwrap(), &mut report).unwrap();
    let before = report_text(report);
    assert_eq!(before.lines().filter(|l| l.starts_with("paint Line")).count(), 1);

    let mut report = Vec::new();
    replay
        .run(parse_script(r#"{"event":"blink"}"#).unwrap(), &mut report)
        .unwrap();
    let after = report_text(report);
    assert!(after.lines().any(|l| l.starts_with("paint Text")));
    assert!(!after.lines().any(|l| l.starts_with("paint Line")));
    assert!(!replay.view().caret_visible());
}

#[test]
fn blink_while_unfocused_paints_nothing() {
    let (mut replay, _rx) = replay(ReplayOptions { paint: true });
    let script = r#"
{"event":"set_line","index":0,"line":{"text":"abc\n"}}
{"event":"redraw","y":0,"height":17}
"#;
    replay.run(parse_script(script).unwrap(), &mut Vec::new()).unwrap();

    let mut report = Vec::new();
    replay.blink_tick(Instant::now(), &mut report).unwrap();
    assert!(report.is_empty());
}

#[test]
fn update_past_cache_end_is_an_error() {
    let (mut replay, _rx) = replay(ReplayOptions::default());
    let event = parse_script(r#"{"event":"update","ops":[{"op":"copy","n":3}]}"#)
        .unwrap()
        .remove(0);
    let mut report = Vec::new();
    assert!(matches!(
        replay.apply(event, &mut report),
        Err(ViewError::Protocol(_))
    ));
}
