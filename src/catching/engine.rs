//! Catching domain: the catch-the-creature game logic.
//!
//! [`CatchEngine`] is plain state with no ECS access, so every rule (throw
//! gating, projectile motion, capture draws, replacement and completion) can
//! be driven directly from tests.

use std::time::Duration;

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::content::{CatchTuning, CreatureDef, Rarity};
use crate::core::{DelayQueue, RandomSource};

/// Capture succeeds when the draw lands below the creature's probability.
pub fn capture_succeeds(draw: f32, capture_probability: f32) -> bool {
    draw < capture_probability
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatchPhase {
    #[default]
    Battling,
    JustCaught,
    Complete,
}

/// The creature currently on the field.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureTarget {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub rarity: Rarity,
    pub health: u32,
    pub max_health: u32,
    pub capture_probability: f32,
}

impl CaptureTarget {
    pub fn from_def(def: &CreatureDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            image: def.image.clone(),
            category: def.category.clone(),
            rarity: def.rarity,
            health: def.max_health,
            max_health: def.max_health,
            capture_probability: def.capture_probability,
        }
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }
}

/// A thrown ball travelling in a straight line toward its release point.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub position: Vec2,
    pub origin: Vec2,
    pub target: Vec2,
    pub thrown: bool,
    pub hit: bool,
}

impl Projectile {
    pub fn remaining(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Move `speed` pixels toward the target without passing it.
    fn advance(&mut self, speed: f32) {
        let offset = self.target - self.position;
        let distance = offset.length();
        if distance <= speed {
            self.position = self.target;
        } else {
            self.position += offset / distance * speed;
        }
    }
}

/// Observable outcomes of the catching round
#[derive(Debug, Clone, PartialEq)]
pub enum CatchEvent {
    Caught { creature: CaptureTarget, total: usize },
    Escaped { creature: String, health: u32 },
    /// The target fainted or the next round began with a fresh creature
    NewTarget { creature: CaptureTarget },
    BattleResumed,
    NoticeCleared,
    Completed,
}

impl Message for CatchEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatchTimer {
    CelebrationOver,
    ResumeBattle,
    ClearNotice(u32),
    Wander,
}

/// Round state. Inserted when the catching stage opens, removed on exit.
#[derive(Resource, Debug)]
pub struct CatchEngine {
    tuning: CatchTuning,
    pool: Vec<CreatureDef>,
    phase: CatchPhase,
    target: CaptureTarget,
    caught: Vec<CaptureTarget>,
    projectiles: Vec<Projectile>,
    next_projectile: u32,
    notice: Option<String>,
    notice_generation: u32,
    wander_offset: Vec2,
    completed: bool,
    delays: DelayQueue<CatchTimer>,
}

impl CatchEngine {
    /// Start a round. Returns `None` when there is nothing to catch.
    pub fn new(pool: Vec<CreatureDef>, tuning: CatchTuning, rng: &mut impl RandomSource) -> Option<Self> {
        let target = draw_target(&pool, rng)?;
        let mut delays = DelayQueue::new();
        delays.schedule_secs(tuning.wander_interval_secs, CatchTimer::Wander);

        Some(Self {
            tuning,
            pool,
            phase: CatchPhase::Battling,
            target,
            caught: Vec::new(),
            projectiles: Vec::new(),
            next_projectile: 0,
            notice: None,
            notice_generation: 0,
            wander_offset: Vec2::ZERO,
            completed: false,
            delays,
        })
    }

    pub fn phase(&self) -> CatchPhase {
        self.phase
    }

    pub fn target(&self) -> &CaptureTarget {
        &self.target
    }

    pub fn caught(&self) -> &[CaptureTarget] {
        &self.caught
    }

    pub fn quota(&self) -> usize {
        self.tuning.catch_quota
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn wander_offset(&self) -> Vec2 {
        self.wander_offset
    }

    pub fn accepts_throws(&self) -> bool {
        self.phase == CatchPhase::Battling
    }

    /// Release a ball from `origin` toward `release`. Ignored unless battling.
    pub fn throw(&mut self, origin: Vec2, release: Vec2) -> Option<u32> {
        if !self.accepts_throws() {
            return None;
        }
        let id = self.next_projectile;
        self.next_projectile += 1;
        self.projectiles.push(Projectile {
            id,
            position: origin,
            origin,
            target: release,
            thrown: true,
            hit: false,
        });
        Some(id)
    }

    /// One animation tick: move every projectile, then resolve the hits.
    pub fn step(&mut self, rng: &mut impl RandomSource) -> Vec<CatchEvent> {
        let speed = self.tuning.projectile_speed;
        let radius = self.tuning.hit_radius;

        for projectile in &mut self.projectiles {
            projectile.advance(speed);
            if projectile.remaining() < radius {
                projectile.hit = true;
            }
        }

        let (hits, flying): (Vec<_>, Vec<_>) =
            self.projectiles.drain(..).partition(|p| p.hit);
        self.projectiles = flying;

        let mut events = Vec::new();
        for projectile in hits {
            self.resolve_hit(&projectile, rng, &mut events);
        }
        events
    }

    fn resolve_hit(
        &mut self,
        projectile: &Projectile,
        rng: &mut impl RandomSource,
        events: &mut Vec<CatchEvent>,
    ) {
        if self.phase != CatchPhase::Battling {
            debug!("Projectile {} landed outside battle, discarded", projectile.id);
            return;
        }

        let draw = rng.roll();
        if capture_succeeds(draw, self.target.capture_probability) {
            self.caught.push(self.target.clone());
            self.phase = CatchPhase::JustCaught;
            self.delays
                .schedule_secs(self.tuning.celebration_secs, CatchTimer::CelebrationOver);
            events.push(CatchEvent::Caught {
                creature: self.target.clone(),
                total: self.caught.len(),
            });
            return;
        }

        self.target.health = self.target.health.saturating_sub(self.tuning.escape_damage);
        self.notice_generation += 1;
        self.notice = Some(format!("{} broke free!", self.target.name));
        self.delays.schedule_secs(
            self.tuning.escaped_notice_secs,
            CatchTimer::ClearNotice(self.notice_generation),
        );
        events.push(CatchEvent::Escaped {
            creature: self.target.name.clone(),
            health: self.target.health,
        });

        if self.target.health == 0 {
            self.replace_target(rng, events);
        }
    }

    fn replace_target(&mut self, rng: &mut impl RandomSource, events: &mut Vec<CatchEvent>) {
        if let Some(target) = draw_target(&self.pool, rng) {
            self.target = target;
            self.wander_offset = Vec2::ZERO;
            events.push(CatchEvent::NewTarget {
                creature: self.target.clone(),
            });
        }
    }

    /// Advance the round clock and apply every timer that came due.
    pub fn tick_delays(&mut self, delta: Duration, rng: &mut impl RandomSource) -> Vec<CatchEvent> {
        let mut events = Vec::new();

        for timer in self.delays.tick(delta) {
            match timer {
                CatchTimer::CelebrationOver => {
                    if self.caught.len() >= self.tuning.catch_quota {
                        self.phase = CatchPhase::Complete;
                        if !self.completed {
                            self.completed = true;
                            events.push(CatchEvent::Completed);
                        }
                    } else {
                        self.replace_target(rng, &mut events);
                        self.delays
                            .schedule_secs(self.tuning.next_target_secs, CatchTimer::ResumeBattle);
                    }
                }
                CatchTimer::ResumeBattle => {
                    if self.phase == CatchPhase::JustCaught {
                        self.phase = CatchPhase::Battling;
                        events.push(CatchEvent::BattleResumed);
                    }
                }
                CatchTimer::ClearNotice(generation) => {
                    if generation == self.notice_generation && self.notice.take().is_some() {
                        events.push(CatchEvent::NoticeCleared);
                    }
                }
                CatchTimer::Wander => {
                    self.wander(rng);
                    self.delays
                        .schedule_secs(self.tuning.wander_interval_secs, CatchTimer::Wander);
                }
            }
        }

        events
    }

    /// Nudge the target by a random step, staying inside the wander box.
    pub fn wander(&mut self, rng: &mut impl RandomSource) {
        let (step_x, step_y) = self.tuning.wander_step;
        let (limit_x, limit_y) = self.tuning.wander_limit;
        let step = Vec2::new(rng.jitter() * step_x, rng.jitter() * step_y);
        self.wander_offset = (self.wander_offset + step)
            .clamp(Vec2::new(-limit_x, -limit_y), Vec2::new(limit_x, limit_y));
    }
}

fn draw_target(pool: &[CreatureDef], rng: &mut impl RandomSource) -> Option<CaptureTarget> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.pick(pool.len())).map(CaptureTarget::from_def)
}
