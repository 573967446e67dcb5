//! Core domain: unit tests for stage flow, delays, randomness and session.

use std::time::Duration;

use super::{
    CaughtCreature, CompanionChoice, CompanionSelection, DelayQueue, RandomSource,
    SelectionEvent, Session, SessionRng, Stage, StageSequencer,
};
use crate::content::{CompanionDef, CompanionStatsDef, SelectionTuning};

fn companion_def(id: &str, name: &str) -> CompanionDef {
    CompanionDef {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("sprites/companions/{}.png", id),
        category: "Grass".to_string(),
        description: "A loyal companion".to_string(),
        stats: CompanionStatsDef {
            hp: 45,
            attack: 49,
            defense: 49,
        },
        accent: (74, 222, 128),
    }
}

#[test]
fn test_stage_order_is_linear() {
    let mut stage = Stage::Intro;
    let mut visited = vec![stage];
    while let Some(next) = stage.next() {
        assert_eq!(next.index(), stage.index() + 1);
        stage = next;
        visited.push(stage);
    }
    assert_eq!(visited, Stage::ORDER.to_vec());
    assert!(Stage::Final.is_terminal());
    assert!(!Stage::SeekAndFind.is_terminal());
}

#[test]
fn test_sequencer_advances_monotonically() {
    let mut sequencer = StageSequencer::default();
    assert_eq!(sequencer.current(), Stage::Intro);

    for expected in &Stage::ORDER[1..] {
        let before = sequencer.current().index();
        assert_eq!(sequencer.advance(), Some(*expected));
        assert!(sequencer.current().index() > before);
    }

    assert_eq!(sequencer.current(), Stage::Final);
    assert_eq!(sequencer.advances(), 6);

    // Terminal stage is sticky
    assert_eq!(sequencer.advance(), None);
    assert_eq!(sequencer.current(), Stage::Final);
    assert_eq!(sequencer.advances(), 6);
}

#[test]
fn test_sequencer_ignores_stale_completion() {
    let mut sequencer = StageSequencer::default();

    assert_eq!(sequencer.complete(Stage::Intro), Some(Stage::Selection));
    // Duplicate report for the stage that just finished
    assert_eq!(sequencer.complete(Stage::Intro), None);
    // Report for a stage that is not active yet
    assert_eq!(sequencer.complete(Stage::Catching), None);

    assert_eq!(sequencer.current(), Stage::Selection);
    assert_eq!(sequencer.advances(), 1);
}

#[test]
fn test_delay_queue_fires_in_order() {
    let mut queue = DelayQueue::new();
    queue.schedule_secs(2.0, "second");
    queue.schedule_secs(0.5, "first");
    queue.schedule_secs(2.0, "third");

    assert!(queue.tick(Duration::from_millis(400)).is_empty());
    assert_eq!(queue.tick(Duration::from_millis(100)), vec!["first"]);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.tick(Duration::from_secs(5)), vec!["second", "third"]);
    assert!(queue.is_empty());
}

#[test]
fn test_delay_queue_schedules_relative_to_now() {
    let mut queue = DelayQueue::new();
    queue.tick(Duration::from_secs(10));
    queue.schedule(Duration::from_secs(1), 7);

    assert!(queue.tick(Duration::from_millis(999)).is_empty());
    assert_eq!(queue.tick(Duration::from_millis(1)), vec![7]);
}

#[test]
fn test_delay_queue_clear_cancels_everything() {
    let mut queue = DelayQueue::new();
    queue.schedule_secs(0.1, 1);
    queue.schedule_secs(0.2, 2);
    assert_eq!(queue.pending().count(), 2);

    queue.clear();
    assert!(queue.tick(Duration::from_secs(1)).is_empty());
}

#[test]
fn test_session_rng_is_reproducible() {
    let mut a = SessionRng::from_seed(42);
    let mut b = SessionRng::from_seed(42);

    for _ in 0..20 {
        let roll = a.roll();
        assert_eq!(roll, b.roll());
        assert!((0.0..1.0).contains(&roll));

        let pick = a.pick(5);
        assert_eq!(pick, b.pick(5));
        assert!(pick < 5);

        let jitter = a.jitter();
        assert_eq!(jitter, b.jitter());
        assert!((-1.0..1.0).contains(&jitter));
    }
    assert_eq!(a.seed(), 42);
}

#[test]
fn test_session_keeps_first_companion() {
    let mut session = Session::default();
    assert!(session.companion().is_none());

    let first = CompanionChoice::from_def(&companion_def("sproutling", "Sproutling"));
    let second = CompanionChoice::from_def(&companion_def("emberpup", "Emberpup"));

    assert!(session.choose_companion(first.clone()));
    assert!(!session.choose_companion(second));
    assert_eq!(session.companion(), Some(&first));
}

#[test]
fn test_session_records_caught_in_order() {
    let mut session = Session::default();
    for name in ["Sparkmouse", "Puffsong"] {
        session.record_caught(CaughtCreature {
            id: name.to_lowercase(),
            name: name.to_string(),
            image: String::new(),
        });
    }

    let names: Vec<_> = session.caught().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Sparkmouse", "Puffsong"]);
}

#[test]
fn test_selection_first_click_wins() {
    let mut selection = CompanionSelection::new(3, SelectionTuning::default());

    assert!(!selection.choose(3));
    assert!(!selection.is_locked());

    assert!(selection.choose(1));
    assert!(!selection.choose(0));
    assert!(!selection.choose(1));
    assert_eq!(selection.chosen(), Some(1));
}

#[test]
fn test_selection_confirms_then_commits() {
    let mut selection = CompanionSelection::new(3, SelectionTuning::default());
    selection.choose(2);

    assert!(selection.tick(Duration::from_millis(499)).is_empty());
    assert_eq!(
        selection.tick(Duration::from_millis(1)),
        vec![SelectionEvent::Confirmed(2)]
    );
    assert!(selection.tick(Duration::from_millis(2_999)).is_empty());
    assert_eq!(
        selection.tick(Duration::from_millis(1)),
        vec![SelectionEvent::Committed(2)]
    );
    assert!(selection.tick(Duration::from_secs(10)).is_empty());
}
