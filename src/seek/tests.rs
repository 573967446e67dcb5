//! Seek domain: unit tests for finding targets and completing once.

use std::time::Duration;

use super::{ClickOutcome, SeekAndFind, SeekEvent};
use crate::content::SeekTuning;

fn hunt(ids: &[&str]) -> SeekAndFind {
    let mut seek = SeekAndFind::new(
        ids.iter().map(|id| id.to_string()).collect(),
        SeekTuning::default(),
    );
    seek.start_scanning();
    seek
}

fn completions(events: &[SeekEvent]) -> usize {
    events
        .iter()
        .filter(|e| **e == SeekEvent::Completed)
        .count()
}

#[test]
fn test_clicks_ignored_before_scanning() {
    let mut seek = SeekAndFind::new(vec!["a".to_string()], SeekTuning::default());
    assert_eq!(seek.click("a"), ClickOutcome::Ignored);
    assert_eq!(seek.found_count(), 0);

    assert!(seek.start_scanning());
    assert!(!seek.start_scanning());
    assert_eq!(seek.click("a"), ClickOutcome::Found { remaining: 0 });
}

#[test]
fn test_found_set_grows_monotonically() {
    let mut seek = hunt(&["a", "b", "c"]);

    assert_eq!(seek.click("b"), ClickOutcome::Found { remaining: 2 });
    assert_eq!(seek.click("b"), ClickOutcome::AlreadyFound);
    assert_eq!(seek.click("zzz"), ClickOutcome::Unknown);
    assert_eq!(seek.found_count(), 1);
    assert!(seek.is_found("b"));
    assert!(!seek.is_found("a"));

    assert_eq!(seek.click("a"), ClickOutcome::Found { remaining: 1 });
    assert_eq!(seek.found_count(), 2);
    assert!(!seek.is_locked());
}

#[test]
fn test_completion_sequence_timing() {
    let mut seek = hunt(&["a", "b"]);
    seek.click("a");
    seek.click("b");
    assert!(seek.is_locked());

    assert!(seek.tick(Duration::from_millis(400)).is_empty());
    assert_eq!(
        seek.tick(Duration::from_millis(100)),
        vec![SeekEvent::ConfettiShown]
    );
    assert!(seek.tick(Duration::from_millis(1_900)).is_empty());
    assert_eq!(
        seek.tick(Duration::from_millis(100)),
        vec![SeekEvent::ConfettiHidden]
    );
    assert_eq!(
        seek.tick(Duration::from_millis(300)),
        vec![SeekEvent::Completed]
    );
}

#[test]
fn test_duplicate_last_click_completes_once() {
    let mut seek = hunt(&["a", "b", "c", "d", "e"]);
    for id in ["a", "b", "c", "d"] {
        seek.click(id);
    }

    assert_eq!(seek.click("e"), ClickOutcome::Found { remaining: 0 });
    assert_eq!(seek.click("e"), ClickOutcome::Ignored);
    assert_eq!(seek.click("a"), ClickOutcome::Ignored);

    let mut total = 0;
    for _ in 0..10 {
        total += completions(&seek.tick(Duration::from_secs(1)));
    }
    assert_eq!(total, 1);
    assert_eq!(seek.found_count(), 5);
}

#[test]
fn test_empty_hunt_completes_after_start() {
    let mut seek = hunt(&[]);
    assert!(seek.is_locked());
    assert_eq!(completions(&seek.tick(Duration::from_secs(5))), 1);
}
