use super::*;
use crate::kernel::services::adapters::{rpc_channel, RpcReceiver};
use crate::kernel::services::ports::RpcNotification;

fn methods(rx: &mut RpcReceiver) -> Vec<RpcNotification> {
    rx.drain()
}

fn count(sent: &[RpcNotification], method: &str) -> usize {
    sent.iter().filter(|n| n.method == method).count()
}

#[test]
fn new_session_is_idle_without_selection() {
    let session = EditSession::new();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.selected_range().is_none());
    assert!(session.marked_range().is_none());
    assert_eq!(session.resolve_target(None), 0..0);
}

#[test]
fn insert_on_idle_session_with_empty_selection() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.sync_selection(SelectedRange::new(0, 0));

    session.insert_text(&sink, "x", None);

    let sent = methods(&mut rx);
    assert_eq!(
        sent,
        vec![RpcNotification::new(INSERT, json!({"chars": "x"}))]
    );
    assert!(!session.has_marked_text());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn set_marked_text_deletes_then_inserts() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.sync_selection(SelectedRange::new(10, 4));

    session.set_marked_text(&sink, "にほ", 0..6, None);

    let sent = methods(&mut rx);
    assert_eq!(sent.len(), 5);
    assert!(sent[..4].iter().all(|n| n.method == DELETE_BACKWARD));
    assert_eq!(sent[4], RpcNotification::new(INSERT, json!({"chars": "にほ"})));
    assert_eq!(session.marked_range(), MarkedRange::new(10, 6));
    assert_eq!(session.selected_range(), SelectedRange::new(10, 6));
    assert_eq!(session.state(), SessionState::Composing);
}

#[test]
fn composition_replaces_previous_marked_text() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.sync_selection(SelectedRange::new(3, 0));

    session.set_marked_text(&sink, "n", 1..1, None);
    rx.drain();
    session.set_marked_text(&sink, "に", 3..3, None);

    let sent = methods(&mut rx);
    assert_eq!(count(&sent, DELETE_BACKWARD), 1);
    assert_eq!(sent.last(), Some(&RpcNotification::new(INSERT, json!({"chars": "に"}))));
    assert_eq!(session.marked_range(), MarkedRange::new(3, 3));
    assert_eq!(session.selected_range(), SelectedRange::new(6, 0));
}

#[test]
fn commit_replaces_marked_range_and_clears_it() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.sync_selection(SelectedRange::new(0, 0));
    session.set_marked_text(&sink, "ni", 2..2, None);
    rx.drain();

    session.insert_text(&sink, "に", None);

    let sent = methods(&mut rx);
    assert_eq!(count(&sent, DELETE_BACKWARD), 2);
    assert_eq!(count(&sent, INSERT), 1);
    assert_eq!(sent[2].params, json!({"chars": "に"}));
    assert!(!session.has_marked_text());
    assert_eq!(session.selected_range(), SelectedRange::new(3, 0));
}

#[test]
fn explicit_replacement_range_wins() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.sync_selection(SelectedRange::new(0, 9));

    session.insert_text(&sink, "ab", Some(4..6));

    let sent = methods(&mut rx);
    assert_eq!(count(&sent, DELETE_BACKWARD), 2);
    assert_eq!(count(&sent, INSERT), 1);
    assert_eq!(session.selected_range(), SelectedRange::new(6, 0));
}

#[test]
fn empty_marked_text_returns_to_idle() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.sync_selection(SelectedRange::new(5, 0));
    session.set_marked_text(&sink, "abc", 3..3, None);
    rx.drain();

    session.set_marked_text(&sink, "", 0..0, None);

    let sent = methods(&mut rx);
    assert_eq!(sent.len(), 4);
    assert!(sent[..3].iter().all(|n| n.method == DELETE_BACKWARD));
    assert_eq!(sent[3], RpcNotification::new(INSERT, json!({"chars": ""})));
    assert!(!session.has_marked_text());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.selected_range(), SelectedRange::new(5, 0));
}

#[test]
fn cancelling_composition_with_empty_text_still_inserts_once() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.set_marked_text(&sink, "ab", 2..2, None);
    rx.drain();

    session.set_marked_text(&sink, "", 0..0, None);

    let sent = methods(&mut rx);
    assert_eq!(count(&sent, DELETE_BACKWARD), 2);
    assert_eq!(count(&sent, INSERT), 1);
    assert_eq!(sent.last().map(|n| &n.params), Some(&json!({"chars": ""})));
}

#[test]
fn empty_insert_sends_deletes_then_insert() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.sync_selection(SelectedRange::new(2, 3));

    session.insert_text(&sink, "", None);

    let sent = methods(&mut rx);
    assert_eq!(count(&sent, DELETE_BACKWARD), 3);
    assert_eq!(sent.last(), Some(&RpcNotification::new(INSERT, json!({"chars": ""}))));
    assert_eq!(session.selected_range(), SelectedRange::new(2, 0));
}

#[test]
fn remove_marked_text_deletes_its_length() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.sync_selection(SelectedRange::new(1, 0));
    session.set_marked_text(&sink, "hello", 5..5, None);
    rx.drain();

    session.remove_marked_text(&sink);

    let sent = methods(&mut rx);
    assert_eq!(sent.len(), 5);
    assert!(sent.iter().all(|n| n.method == DELETE_BACKWARD && n.params == json!([])));
    assert_eq!(session.marked_range(), MarkedRange::NONE);
    assert_eq!(session.selected_range(), SelectedRange::new(1, 0));
}

#[test]
fn remove_without_marked_text_sends_nothing() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.remove_marked_text(&sink);
    assert!(rx.drain().is_empty());
}

#[test]
fn unmark_keeps_text_and_sends_nothing() {
    let (sink, mut rx) = rpc_channel();
    let mut session = EditSession::new();
    session.set_marked_text(&sink, "ka", 2..2, None);
    rx.drain();

    session.unmark_text();

    assert!(rx.drain().is_empty());
    assert!(!session.has_marked_text());
}

#[test]
fn selected_sub_range_is_clamped_to_text() {
    let (sink, _rx) = rpc_channel();
    let mut session = EditSession::new();
    session.sync_selection(SelectedRange::new(2, 0));
    session.set_marked_text(&sink, "abc", 1..40, None);
    assert_eq!(session.selected_range(), SelectedRange::new(3, 2));
}
