//! Effects domain: one-shot confetti bursts drawn as small UI nodes.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::core::{RandomSource, SessionRng};

#[cfg(test)]
mod tests;

const GRAVITY: f32 = 900.0;
const PARTICLE_SIZE: f32 = 9.0;
const PARTICLE_LIFETIME: f32 = 1.6;

/// Request a burst of confetti at `origin` (window pixels).
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    pub origin: Vec2,
    pub colors: Vec<Color>,
    pub particle_count: usize,
    /// Initial speed range in pixels per second
    pub spread: f32,
}

impl Message for ConfettiBurst {}

impl ConfettiBurst {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            colors: vec![
                Color::srgb(0.98, 0.42, 0.62),
                Color::srgb(0.98, 0.8, 0.22),
                Color::srgb(0.35, 0.75, 0.98),
                Color::srgb(0.45, 0.88, 0.5),
                Color::srgb(0.72, 0.5, 0.96),
            ],
            particle_count: 40,
            spread: 420.0,
        }
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        if !colors.is_empty() {
            self.colors = colors;
        }
        self
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }
}

/// Launch velocity for one particle: mostly upward, fanned out sideways.
pub fn launch_velocity(rng: &mut impl RandomSource, spread: f32) -> Vec2 {
    let angle = std::f32::consts::FRAC_PI_2 + rng.jitter() * std::f32::consts::FRAC_PI_3;
    let speed = spread * (0.5 + rng.roll() * 0.5);
    // Window space grows downward
    Vec2::new(angle.cos() * speed, -angle.sin() * speed)
}

#[derive(Component, Debug)]
pub struct ConfettiParticle {
    velocity: Vec2,
    position: Vec2,
    age: f32,
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ConfettiBurst>()
            .add_systems(Update, (spawn_confetti, animate_confetti).chain());
    }
}

fn spawn_confetti(
    mut commands: Commands,
    mut bursts: MessageReader<ConfettiBurst>,
    mut rng: ResMut<SessionRng>,
) {
    for burst in bursts.read() {
        debug!(
            "Confetti burst of {} at {}",
            burst.particle_count, burst.origin
        );
        for _ in 0..burst.particle_count {
            let velocity = launch_velocity(&mut *rng, burst.spread);
            let color = burst
                .colors
                .get(rng.pick(burst.colors.len()))
                .copied()
                .unwrap_or(Color::WHITE);
            commands.spawn((
                ConfettiParticle {
                    velocity,
                    position: burst.origin,
                    age: 0.0,
                },
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(burst.origin.x),
                    top: Val::Px(burst.origin.y),
                    width: Val::Px(PARTICLE_SIZE),
                    height: Val::Px(PARTICLE_SIZE * 0.6),
                    ..default()
                },
                BackgroundColor(color),
                GlobalZIndex(100),
            ));
        }
    }
}

fn animate_confetti(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(Entity, &mut ConfettiParticle, &mut Node, &mut BackgroundColor)>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut node, mut color) in &mut particles {
        particle.age += dt;
        if particle.age >= PARTICLE_LIFETIME {
            commands.entity(entity).despawn();
            continue;
        }

        particle.velocity.y += GRAVITY * dt;
        let step = particle.velocity * dt;
        particle.position += step;
        node.left = Val::Px(particle.position.x);
        node.top = Val::Px(particle.position.y);
        color.0.set_alpha(1.0 - particle.age / PARTICLE_LIFETIME);
    }
}
