//! Cake domain: unit tests for the cut gesture.

use std::time::Duration;

use super::{CakeCut, CakeEvent, GestureSample};
use crate::content::CakeTuning;

fn cake() -> CakeCut {
    CakeCut::new(CakeTuning::default())
}

fn committed_on(cut: &mut CakeCut, samples: &[(f32, f32)]) -> Option<usize> {
    samples.iter().position(|(dy, velocity)| {
        cut.update(GestureSample::new(0.0, *dy, *velocity))
            .contains(&CakeEvent::Committed)
    })
}

#[test]
fn test_slow_then_fast_drag_commits_on_second_sample() {
    let mut cut = cake();
    cut.begin_drag();

    assert_eq!(committed_on(&mut cut, &[(50.0, 0.1), (190.0, 0.6)]), Some(1));
    assert!(cut.is_committed());
    assert!(!cut.is_dragging());
}

#[test]
fn test_slow_deep_drag_never_commits() {
    let mut cut = cake();
    cut.begin_drag();

    assert_eq!(committed_on(&mut cut, &[(190.0, 0.1)]), None);
    assert!(!cut.is_committed());
    // The knife is in the cake, capped at the maximum reveal
    assert_eq!(cut.slice_reveal(), 110.0);
}

#[test]
fn test_commit_requires_every_condition() {
    // Fast but shallow
    let mut cut = cake();
    cut.begin_drag();
    assert_eq!(committed_on(&mut cut, &[(180.0, 2.0)]), None);

    // Deep and fast but not dragging
    let mut cut = cake();
    assert_eq!(committed_on(&mut cut, &[(250.0, 2.0)]), None);

    // Deep but exactly at the velocity limit
    let mut cut = cake();
    cut.begin_drag();
    assert_eq!(committed_on(&mut cut, &[(250.0, 0.5)]), None);
}

#[test]
fn test_commit_is_idempotent() {
    let mut cut = cake();
    cut.begin_drag();
    assert_eq!(committed_on(&mut cut, &[(200.0, 1.0)]), Some(0));

    cut.begin_drag();
    assert!(cut.update(GestureSample::new(0.0, 260.0, 3.0)).is_empty());
    assert!(cut.is_committed());

    let bursts = cut
        .tick(Duration::from_secs(1))
        .into_iter()
        .filter(|e| matches!(e, CakeEvent::Burst(_)))
        .count();
    assert_eq!(bursts, 4);
}

#[test]
fn test_knife_contact_reported_once_per_drag() {
    let mut cut = cake();
    cut.begin_drag();

    let first = cut.update(GestureSample::new(0.0, 90.0, 0.1));
    assert_eq!(first, vec![CakeEvent::KnifeContact]);
    assert_eq!(cut.slice_reveal(), 10.0);
    assert!(cut.update(GestureSample::new(0.0, 120.0, 0.1)).is_empty());

    cut.end_drag();
    cut.begin_drag();
    assert_eq!(
        cut.update(GestureSample::new(0.0, 100.0, 0.1)),
        vec![CakeEvent::KnifeContact]
    );
}

#[test]
fn test_release_before_commit_resets() {
    let mut cut = cake();
    cut.begin_drag();
    cut.update(GestureSample::new(12.0, 150.0, 0.2));
    assert!(cut.slice_reveal() > 0.0);

    cut.end_drag();
    assert_eq!(cut.slice_reveal(), 0.0);
    assert_eq!(cut.offset().y, 0.0);
    assert!(!cut.is_dragging());

    // Samples after release are ignored
    assert!(cut.update(GestureSample::new(0.0, 300.0, 5.0)).is_empty());
    assert!(!cut.is_committed());
}

#[test]
fn test_celebration_timeline() {
    let mut cut = cake();
    cut.begin_drag();
    committed_on(&mut cut, &[(200.0, 1.0)]);

    let early = cut.tick(Duration::from_millis(700));
    assert_eq!(
        early,
        vec![
            CakeEvent::Burst(0),
            CakeEvent::Burst(1),
            CakeEvent::Burst(2),
            CakeEvent::Burst(3)
        ]
    );
    assert!(!cut.is_settled());

    assert_eq!(cut.tick(Duration::from_millis(800)), vec![CakeEvent::SliceSettled]);
    assert!(cut.is_settled());
    assert!(!cut.continue_ready());

    assert_eq!(cut.tick(Duration::from_millis(1_500)), vec![CakeEvent::ContinueReady]);
    assert!(cut.continue_ready());
    assert!(cut.tick(Duration::from_secs(10)).is_empty());
}
