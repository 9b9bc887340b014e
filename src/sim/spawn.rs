//! Obstacle and collectible spawn decisions
//!
//! Gap distribution is deliberately irregular: once the newest obstacle has
//! scrolled past the trailing threshold, each tick rolls an independent 25%
//! chance to spawn. Gaps are never tighter than the threshold allows but can
//! stretch arbitrarily, which is the intended difficulty mechanism.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::consts::*;

/// Seeded spawn controller. All randomness in the simulation flows through
/// here so identical seeds replay identical obstacle layouts.
pub struct Spawner {
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Decide whether to spawn an obstacle this tick. Returns the entry x
    /// when the roll succeeds.
    pub fn maybe_spawn_obstacle(&mut self, obstacles: &[Obstacle]) -> Option<f32> {
        let trailing_clear = obstacles
            .last()
            .map(|newest| newest.pos.x < SPAWN_TRAIL_THRESHOLD)
            .unwrap_or(true);

        if trailing_clear && self.rng.random::<f32>() < SPAWN_CHANCE {
            Some(SPAWN_X)
        } else {
            None
        }
    }

    /// Horizontal respawn position for the collectible after a catch or an
    /// off-screen exit
    pub fn respawn_x(&mut self) -> f32 {
        SPAWN_X + self.rng.random_range(0.0..RESPAWN_JITTER)
    }
}
