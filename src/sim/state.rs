//! Game state and core simulation types
//!
//! Entity positions are the top-left corner of the sprite box, y growing
//! downward, matching the coordinate space the presentation layer renders in.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::score::ScoreKeeper;
use super::spawn::Spawner;
use super::timer::TimerQueue;
use crate::consts::*;
use crate::ground_level;
use crate::persistence::HighScoreStore;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen, waiting for the first Start intent
    Start,
    /// Active session, the tick clock is running
    Playing,
    /// Session ended, waiting for a restart
    GameOver,
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// True from the jump up-step until the delayed settle fires
    pub airborne: bool,
}

impl Player {
    /// Player resting on the ground at the fixed horizontal offset
    pub fn at_rest(ground: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, ground - PLAYER_SIZE),
            airborne: false,
        }
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
}

impl Obstacle {
    /// New obstacle standing on the ground at the given x
    pub fn new(id: u32, x: f32, ground: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, ground - OBSTACLE_HEIGHT),
        }
    }

    /// True once the obstacle has fully scrolled past the left boundary
    pub fn off_screen(&self) -> bool {
        self.pos.x <= -OBSTACLE_WIDTH
    }
}

/// The single bonus collectible
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    /// Set on catch; cleared (and the collectible repositioned) by the
    /// catch-cooldown timer. Not re-tested against the player while set.
    pub just_caught: bool,
}

impl Collectible {
    /// Collectible at its session-start position, on the bob centerline
    pub fn at_start(ground: f32) -> Self {
        Self {
            pos: Vec2::new(COLLECTIBLE_START_X, Self::bob_centerline(ground)),
            just_caught: false,
        }
    }

    /// Vertical centerline the bob oscillates around
    pub fn bob_centerline(ground: f32) -> f32 {
        ground - COLLECTIBLE_SIZE - COLLECTIBLE_CLEARANCE
    }
}

/// Read-only view of the game sampled for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub collectible: Collectible,
    /// Display score (raw / 10)
    pub score: u64,
    pub high_score: u64,
    pub is_new_record: bool,
    pub is_playing: bool,
}

/// A complete game session: entities, score, speed, state machine bookkeeping.
///
/// Owns its persistence gateway and RNG; hosts drive it through the intent
/// entry points and `tick`/`advance_timers` in `sim::tick`.
pub struct Game {
    /// Run seed for reproducible spawn sequences
    pub seed: u64,
    pub phase: Phase,
    pub player: Player,
    /// Ordered by creation; culled once off-screen
    pub obstacles: Vec<Obstacle>,
    pub collectible: Collectible,
    /// Scroll speed in pixels per tick
    pub speed: f32,
    /// Restart gate: false during the post-game-over cooldown
    pub restart_allowed: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) score: ScoreKeeper,
    pub(crate) spawner: Spawner,
    pub(crate) timers: TimerQueue,
    /// Bumped on every transition that replaces session state; stale timer
    /// firings are detected against it
    pub(crate) generation: u64,
    pub(crate) viewport_height: f32,
    /// Ground line captured at the last reset
    pub(crate) ground: f32,
    next_id: u32,
}

impl Game {
    /// Create a game on the title screen, loading the persisted high score
    pub fn new(seed: u64, store: Box<dyn HighScoreStore>) -> Self {
        let ground = ground_level(DEFAULT_VIEWPORT_HEIGHT);
        Self {
            seed,
            phase: Phase::Start,
            player: Player::at_rest(ground),
            obstacles: Vec::new(),
            collectible: Collectible::at_start(ground),
            speed: SPEED_FLOOR,
            restart_allowed: true,
            time_ticks: 0,
            score: ScoreKeeper::new(store),
            spawner: Spawner::new(seed),
            timers: TimerQueue::default(),
            generation: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            ground,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID (monotonic across sessions)
    pub(crate) fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Discard session entities and rebuild them on the current ground line.
    /// Recomputes the ground from the latest reported viewport height, so a
    /// between-session viewport change lands here.
    pub(crate) fn reset_entities(&mut self) {
        self.ground = ground_level(self.viewport_height);
        self.player = Player::at_rest(self.ground);
        self.obstacles.clear();
        self.collectible = Collectible::at_start(self.ground);
    }

    /// Report the current viewport height. Takes effect at the next reset;
    /// mid-session behavior is intentionally unspecified.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    /// Sample a read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: self.player,
            obstacles: self.obstacles.clone(),
            collectible: self.collectible,
            score: self.score.display(),
            high_score: self.score.high(),
            is_new_record: self.score.is_new_record(),
            is_playing: self.phase == Phase::Playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn game() -> Game {
        Game::new(7, Box::new(MemoryStore::default()))
    }

    #[test]
    fn test_player_rests_on_ground() {
        let g = game();
        assert_eq!(
            g.player.pos.y,
            ground_level(DEFAULT_VIEWPORT_HEIGHT) - PLAYER_SIZE
        );
        assert!(!g.player.airborne);
    }

    #[test]
    fn test_reset_uses_latest_viewport_height() {
        let mut g = game();
        g.set_viewport_height(800.0);
        g.reset_entities();
        assert_eq!(g.ground, ground_level(800.0));
        assert_eq!(g.player.pos.y, ground_level(800.0) - PLAYER_SIZE);
        assert_eq!(
            g.collectible.pos.y,
            Collectible::bob_centerline(ground_level(800.0))
        );
    }

    #[test]
    fn test_obstacle_ids_monotonic() {
        let mut g = game();
        let a = g.next_obstacle_id();
        g.reset_entities();
        let b = g.next_obstacle_id();
        assert!(b > a);
    }
}
