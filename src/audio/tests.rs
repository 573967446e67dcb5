//! Audio domain: tests for the music lifecycle.

use super::{MusicCommand, MusicState};

#[test]
fn test_music_starts_once() {
    let state = MusicState::default().apply(MusicCommand::Start);
    assert_eq!(state, MusicState::Playing);
    assert_eq!(state.apply(MusicCommand::Start), MusicState::Playing);
}

#[test]
fn test_toggle_before_start_does_nothing() {
    assert_eq!(
        MusicState::Idle.apply(MusicCommand::Toggle),
        MusicState::Idle
    );
}

#[test]
fn test_toggle_pauses_and_resumes() {
    let playing = MusicState::Idle.apply(MusicCommand::Start);
    let paused = playing.apply(MusicCommand::Toggle);
    assert_eq!(paused, MusicState::Paused);
    assert_eq!(paused.label(), "Music: Off");
    assert_eq!(paused.apply(MusicCommand::Toggle), MusicState::Playing);
}

#[test]
fn test_stopped_music_stays_stopped() {
    let stopped = MusicState::Paused.apply(MusicCommand::Stop);
    assert_eq!(stopped, MusicState::Stopped);

    for command in [MusicCommand::Start, MusicCommand::Toggle, MusicCommand::Stop] {
        assert_eq!(stopped.apply(command), MusicState::Stopped);
    }
}
