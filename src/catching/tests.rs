//! Catching domain: unit tests for throws, hits, captures and completion.

use std::collections::VecDeque;
use std::time::Duration;

use bevy::prelude::Vec2;

use super::{CatchEngine, CatchEvent, CatchPhase, capture_succeeds};
use crate::content::{CatchTuning, CreatureDef, Rarity, SelectionTuning, builtin_content};
use crate::core::{
    CompanionChoice, CompanionSelection, RandomSource, SelectionEvent, Session, Stage,
    StageSequencer,
};

/// Replays scripted rolls, then repeats `fallback`.
struct ScriptedRng {
    rolls: VecDeque<f32>,
    fallback: f32,
}

impl ScriptedRng {
    fn always(value: f32) -> Self {
        Self {
            rolls: VecDeque::new(),
            fallback: value,
        }
    }

    fn sequence(rolls: &[f32], fallback: f32) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            fallback,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn roll(&mut self) -> f32 {
        self.rolls.pop_front().unwrap_or(self.fallback)
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

fn creature(id: &str, capture_probability: f32) -> CreatureDef {
    CreatureDef {
        id: id.to_string(),
        name: id.to_string(),
        image: String::new(),
        category: "Normal".to_string(),
        max_health: 100,
        capture_probability,
        rarity: Rarity::Common,
    }
}

fn engine_with(capture_probability: f32, rng: &mut ScriptedRng) -> CatchEngine {
    CatchEngine::new(
        vec![creature("puffsong", capture_probability)],
        CatchTuning::default(),
        rng,
    )
    .expect("pool is not empty")
}

/// Throw a zero-length drag so it lands on the next step.
fn throw_and_land(engine: &mut CatchEngine, rng: &mut ScriptedRng) -> Vec<CatchEvent> {
    engine.throw(Vec2::new(200.0, 200.0), Vec2::new(200.0, 200.0));
    engine.step(rng)
}

#[test]
fn test_capture_draw_is_pure() {
    assert!(capture_succeeds(0.29, 0.3));
    assert!(!capture_succeeds(0.3, 0.3));
    assert!(!capture_succeeds(0.0, 0.0));
    assert!(capture_succeeds(0.99, 1.0));

    for _ in 0..3 {
        assert_eq!(capture_succeeds(0.25, 0.4), capture_succeeds(0.25, 0.4));
    }
}

#[test]
fn test_empty_pool_has_no_round() {
    let mut rng = ScriptedRng::always(0.0);
    assert!(CatchEngine::new(Vec::new(), CatchTuning::default(), &mut rng).is_none());
}

#[test]
fn test_projectile_closes_distance_until_hit() {
    let mut rng = ScriptedRng::always(0.99);
    let mut engine = engine_with(0.3, &mut rng);

    engine.throw(Vec2::ZERO, Vec2::new(100.0, 0.0));
    let mut last = f32::MAX;
    let mut attempts = 0;

    for _ in 0..20 {
        let events = engine.step(&mut rng);
        attempts += events
            .iter()
            .filter(|e| matches!(e, CatchEvent::Caught { .. } | CatchEvent::Escaped { .. }))
            .count();

        match engine.projectiles().first() {
            Some(projectile) => {
                let remaining = projectile.remaining();
                assert!(remaining < last);
                assert!(remaining >= 30.0);
                last = remaining;
            }
            None => break,
        }
    }

    assert!(engine.projectiles().is_empty());
    assert_eq!(attempts, 1);
}

#[test]
fn test_zero_length_drag_hits_immediately() {
    let mut rng = ScriptedRng::always(0.99);
    let mut engine = engine_with(0.3, &mut rng);

    let events = throw_and_land(&mut engine, &mut rng);
    assert_eq!(events.len(), 1);
    assert!(engine.projectiles().is_empty());
}

#[test]
fn test_failed_capture_damages_and_clears_notice() {
    let mut rng = ScriptedRng::always(0.99);
    let mut engine = engine_with(0.3, &mut rng);

    let events = throw_and_land(&mut engine, &mut rng);
    assert_eq!(
        events,
        vec![CatchEvent::Escaped {
            creature: "puffsong".to_string(),
            health: 80,
        }]
    );
    assert_eq!(engine.phase(), CatchPhase::Battling);
    assert!(engine.notice().is_some());

    let events = engine.tick_delays(Duration::from_millis(1_500), &mut rng);
    assert!(events.contains(&CatchEvent::NoticeCleared));
    assert!(engine.notice().is_none());
}

#[test]
fn test_fainted_target_is_replaced_once() {
    let mut rng = ScriptedRng::always(0.99);
    let mut engine = engine_with(0.3, &mut rng);

    for expected in [80, 60, 40, 20] {
        throw_and_land(&mut engine, &mut rng);
        assert_eq!(engine.target().health, expected);
    }

    let events = throw_and_land(&mut engine, &mut rng);
    let replacements = events
        .iter()
        .filter(|e| matches!(e, CatchEvent::NewTarget { .. }))
        .count();
    assert_eq!(replacements, 1);
    assert_eq!(engine.target().health, engine.target().max_health);
    assert!(engine.caught().is_empty());
}

#[test]
fn test_throws_ignored_while_celebrating() {
    let mut rng = ScriptedRng::always(0.0);
    let mut engine = engine_with(0.3, &mut rng);

    throw_and_land(&mut engine, &mut rng);
    assert_eq!(engine.phase(), CatchPhase::JustCaught);
    assert_eq!(engine.throw(Vec2::ZERO, Vec2::ONE), None);
    assert!(engine.projectiles().is_empty());
}

#[test]
fn test_hits_after_capture_are_discarded() {
    let mut rng = ScriptedRng::sequence(&[0.0], 0.99);
    let mut engine = engine_with(0.3, &mut rng);

    // Two balls land on the same tick; the first one catches
    engine.throw(Vec2::ZERO, Vec2::ZERO);
    engine.throw(Vec2::ONE, Vec2::ONE);
    let events = engine.step(&mut rng);

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], CatchEvent::Caught { total: 1, .. }));
    assert_eq!(engine.caught().len(), 1);
    assert_eq!(engine.target().health, 100);
}

#[test]
fn test_next_target_after_celebration() {
    let mut rng = ScriptedRng::always(0.0);
    let mut engine = engine_with(0.3, &mut rng);

    throw_and_land(&mut engine, &mut rng);

    let events = engine.tick_delays(Duration::from_secs(2), &mut rng);
    assert!(events.iter().any(|e| matches!(e, CatchEvent::NewTarget { .. })));
    assert_eq!(engine.phase(), CatchPhase::JustCaught);

    let events = engine.tick_delays(Duration::from_secs(2), &mut rng);
    assert!(events.contains(&CatchEvent::BattleResumed));
    assert!(engine.accepts_throws());
}

#[test]
fn test_wander_stays_in_bounds() {
    let mut rng = ScriptedRng::always(0.9999);
    let mut engine = engine_with(0.3, &mut rng);

    for _ in 0..50 {
        engine.wander(&mut rng);
        let offset = engine.wander_offset();
        assert!(offset.x.abs() <= 50.0);
        assert!(offset.y.abs() <= 20.0);
    }
    assert_eq!(engine.wander_offset(), Vec2::new(50.0, 20.0));
}

#[test]
fn test_caught_count_bounded_by_quota() {
    let mut rng = ScriptedRng::always(0.0);
    let mut engine = engine_with(0.3, &mut rng);
    let mut previous = 0;

    for _ in 0..10 {
        throw_and_land(&mut engine, &mut rng);
        engine.tick_delays(Duration::from_secs(2), &mut rng);
        engine.tick_delays(Duration::from_secs(2), &mut rng);

        let count = engine.caught().len();
        assert!(count >= previous);
        assert!(count <= 3);
        assert_eq!(engine.phase() == CatchPhase::Complete, count == 3);
        previous = count;
    }
}

#[test]
fn test_end_to_end_forced_success_advances_once() {
    let (registry, defaults) = builtin_content().expect("embedded content parses");
    let mut sequencer = StageSequencer::default();
    let mut session = Session::default();

    // Intro, then pick the first companion
    assert_eq!(sequencer.complete(Stage::Intro), Some(Stage::Selection));
    let mut selection = CompanionSelection::new(registry.companions.len(), SelectionTuning::default());
    assert!(selection.choose(0));
    for event in selection.tick(Duration::from_secs(4)) {
        if let SelectionEvent::Committed(index) = event {
            assert!(session.choose_companion(CompanionChoice::from_def(&registry.companions[index])));
            sequencer.complete(Stage::Selection);
        }
    }
    assert_eq!(sequencer.current(), Stage::Catching);
    let advances_before = sequencer.advances();

    let mut rng = ScriptedRng::always(0.0);
    let mut engine = CatchEngine::new(registry.creatures.clone(), defaults.catching.clone(), &mut rng)
        .expect("creatures available");

    let mut completions = 0;
    for _ in 0..10 {
        let mut events = throw_and_land(&mut engine, &mut rng);
        events.extend(engine.tick_delays(Duration::from_secs(2), &mut rng));
        events.extend(engine.tick_delays(Duration::from_secs(2), &mut rng));

        for event in events {
            if event == CatchEvent::Completed {
                completions += 1;
                // Continue pressed twice
                sequencer.complete(Stage::Catching);
                sequencer.complete(Stage::Catching);
            }
        }
    }

    assert_eq!(engine.caught().len(), 3);
    assert_eq!(completions, 1);
    assert_eq!(sequencer.advances() - advances_before, 1);
    assert_eq!(sequencer.current(), Stage::CakeCutting);
    assert_eq!(
        session.companion().map(|c| c.name.as_str()),
        Some(registry.companions[0].name.as_str())
    );
}
