//! Core domain: injectable randomness for game branching.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the random draws used by the mini-games.
///
/// Production code draws from [`SessionRng`]; tests supply scripted values.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn roll(&mut self) -> f32;

    /// Uniform index in `0..len`. Callers never pass zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform draw in `[-1, 1)`.
    fn jitter(&mut self) -> f32 {
        self.roll() * 2.0 - 1.0
    }
}

/// Seeded generator shared by every screen of the session.
#[derive(Resource, Debug)]
pub struct SessionRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SessionRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::from_seed(rand::rng().random())
    }
}

impl RandomSource for SessionRng {
    fn roll(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len.max(1))
    }
}
