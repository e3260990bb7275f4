use super::*;
use crate::state::feed::ConnectionStatus;
use blocks::display_text;

const FIRST: &str =
    r#"{"block_hash":"0xabc","state_root":"0x1","parent_root":"0x0","slot":5,"proposer_index":2}"#;
const SECOND: &str =
    r#"{"block_hash":"0xdef","state_root":"0x2","parent_root":"0xabc","slot":6,"proposer_index":9}"#;

fn hashes(state: &FeedState) -> Vec<String> {
    state
        .records()
        .iter()
        .map(|r| display_text(r.block_hash.as_ref()))
        .collect()
}

// =============================================================
// apply_frame
// =============================================================

#[test]
fn apply_frame_appends_complete_block() {
    let mut state = FeedState::new("c1");
    assert_eq!(apply_frame(&mut state, FIRST, DecodePolicy::Lenient), FrameOutcome::Appended);

    let record = &state.records()[0];
    assert_eq!(display_text(record.block_hash.as_ref()), "0xabc");
    assert_eq!(display_text(record.state_root.as_ref()), "0x1");
    assert_eq!(display_text(record.parent_root.as_ref()), "0x0");
    assert_eq!(display_text(record.slot.as_ref()), "5");
    assert_eq!(display_text(record.proposer_index.as_ref()), "2");
}

#[test]
fn apply_frame_keeps_arrival_order() {
    let mut state = FeedState::new("c1");
    apply_frame(&mut state, FIRST, DecodePolicy::Lenient);
    apply_frame(&mut state, SECOND, DecodePolicy::Lenient);
    assert_eq!(hashes(&state), ["0xabc", "0xdef"]);
}

#[test]
fn apply_frame_n_frames_yield_n_records() {
    let mut state = FeedState::new("c1");
    for slot in 0..25 {
        let text = format!(r#"{{"block_hash":"h{slot}","slot":{slot}}}"#);
        apply_frame(&mut state, &text, DecodePolicy::Lenient);
    }
    assert_eq!(state.len(), 25);
    assert_eq!(display_text(state.records()[24].slot.as_ref()), "24");
}

#[test]
fn apply_frame_drops_malformed_text_and_keeps_list() {
    let mut state = FeedState::new("c1");
    apply_frame(&mut state, FIRST, DecodePolicy::Lenient);

    let outcome = apply_frame(&mut state, "{not json", DecodePolicy::Lenient);
    assert!(matches!(outcome, FrameOutcome::Dropped(_)));
    assert_eq!(hashes(&state), ["0xabc"]);
    assert_eq!(state.revision, 1);
    assert_eq!(state.dropped, 1);
    assert!(
        state
            .last_error
            .as_deref()
            .is_some_and(|e| e.starts_with("frame is not valid JSON"))
    );
}

#[test]
fn apply_frame_lenient_renders_partial_block() {
    let mut state = FeedState::new("c1");
    assert_eq!(
        apply_frame(&mut state, r#"{"block_hash":"H"}"#, DecodePolicy::Lenient),
        FrameOutcome::Appended
    );
    assert!(state.records()[0].slot.is_none());
}

#[test]
fn apply_frame_strict_drops_partial_block() {
    let mut state = FeedState::new("c1");
    let outcome = apply_frame(&mut state, r#"{"block_hash":"H"}"#, DecodePolicy::Strict);
    assert!(matches!(outcome, FrameOutcome::Dropped(_)));
    assert!(state.is_empty());
    assert_eq!(state.dropped, 1);
}

// =============================================================
// FeedSubscription / FeedHandle
// =============================================================

#[test]
fn channel_starts_live() {
    let (subscription, handle) = FeedSubscription::channel();
    assert!(subscription.is_live());
    assert!(handle.is_live());
}

#[test]
fn deliver_after_unsubscribe_has_no_effect() {
    let (mut subscription, handle) = FeedSubscription::channel();
    let mut state = FeedState::new("c1");
    assert_eq!(handle.deliver(&mut state, FIRST, DecodePolicy::Lenient), FrameOutcome::Appended);

    subscription.unsubscribe();
    assert_eq!(handle.deliver(&mut state, SECOND, DecodePolicy::Lenient), FrameOutcome::Detached);
    assert_eq!(handle.deliver(&mut state, "garbage", DecodePolicy::Lenient), FrameOutcome::Detached);
    assert_eq!(hashes(&state), ["0xabc"]);
    assert_eq!(state.dropped, 0);
}

#[test]
fn unsubscribe_is_idempotent() {
    let (mut subscription, handle) = FeedSubscription::channel();
    subscription.unsubscribe();
    subscription.unsubscribe();
    assert!(!subscription.is_live());
    assert!(!handle.is_live());
}

#[test]
fn dropping_subscription_detaches_handle() {
    let (subscription, handle) = FeedSubscription::channel();
    drop(subscription);
    assert!(!handle.is_live());
}

#[test]
fn remount_starts_empty_with_one_live_subscription() {
    // First mount receives a block, then unmounts.
    let (mut first_sub, first_handle) = FeedSubscription::channel();
    let mut first_state = FeedState::new("c1");
    first_handle.deliver(&mut first_state, FIRST, DecodePolicy::Lenient);
    first_sub.unsubscribe();

    // Second mount gets fresh state and its own subscription.
    let (second_sub, second_handle) = FeedSubscription::channel();
    let mut second_state = FeedState::new("c2");
    assert!(second_state.is_empty());

    assert_eq!(
        first_handle.deliver(&mut second_state, SECOND, DecodePolicy::Lenient),
        FrameOutcome::Detached
    );
    assert_eq!(
        second_handle.deliver(&mut second_state, SECOND, DecodePolicy::Lenient),
        FrameOutcome::Appended
    );
    assert_eq!(hashes(&second_state), ["0xdef"]);
    assert!(second_sub.is_live());
    assert!(!first_handle.is_live());
}

#[test]
fn first_delivered_frame_marks_connection_open() {
    let (_subscription, handle) = FeedSubscription::channel();
    let mut state = FeedState::new("c1");
    state.connection_status = ConnectionStatus::Connecting;

    handle.deliver(&mut state, "{not json", DecodePolicy::Lenient);
    assert_eq!(state.connection_status, ConnectionStatus::Connected);
}

#[test]
fn detached_delivery_leaves_status_alone() {
    let (mut subscription, handle) = FeedSubscription::channel();
    let mut state = FeedState::new("c1");
    state.connection_status = ConnectionStatus::Connecting;
    subscription.unsubscribe();

    handle.deliver(&mut state, FIRST, DecodePolicy::Lenient);
    assert_eq!(state.connection_status, ConnectionStatus::Connecting);
}
