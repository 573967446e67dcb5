//! Debug domain: tests for status message handling.

use super::DebugState;

#[test]
fn test_status_message_expires() {
    let mut state = DebugState::default();
    state.set_message("Skipped Intro", 2.0);

    state.tick_message(1.5);
    assert!(state.status_message.is_some());

    state.tick_message(0.6);
    assert!(state.status_message.is_none());
}
