//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Wall-clock time passed in by the host, never sampled here
//! - No rendering or platform dependencies

pub mod collision;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{catches_collectible, hits_obstacle};
pub use score::ScoreKeeper;
pub use spawn::Spawner;
pub use state::{Collectible, Game, Obstacle, Phase, Player, Snapshot};
pub use timer::{TimerEffect, TimerQueue};
