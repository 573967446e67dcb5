//! Effects domain: tests for burst configuration and launch math.

use bevy::prelude::*;

use super::{ConfettiBurst, launch_velocity};
use crate::core::SessionRng;

#[test]
fn test_burst_builder() {
    let burst = ConfettiBurst::new(Vec2::new(10.0, 20.0))
        .with_particle_count(12)
        .with_spread(100.0)
        .with_colors(Vec::new());

    assert_eq!(burst.particle_count, 12);
    assert_eq!(burst.spread, 100.0);
    // An empty palette keeps the default colours
    assert!(!burst.colors.is_empty());

    let tinted = burst.with_colors(vec![Color::WHITE]);
    assert_eq!(tinted.colors, vec![Color::WHITE]);
}

#[test]
fn test_particles_launch_upward_within_spread() {
    let mut rng = SessionRng::from_seed(7);

    for _ in 0..100 {
        let velocity = launch_velocity(&mut rng, 400.0);
        assert!(velocity.y < 0.0);
        assert!(velocity.length() <= 400.0 + 0.01);
        assert!(velocity.length() >= 200.0 - 0.01);
    }
}
