//! Bee Chase - a side-scrolling jump-and-catch arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, spawning, scoring, game state)
//! - `persistence`: High score storage behind a key/value contract
//!
//! Rendering, raw input plumbing and the storage medium live outside the
//! simulation: hosts feed normalized Jump/Start intents and a millisecond
//! clock in, and read a `Snapshot` back out once per tick.

pub mod persistence;
pub mod sim;

pub use persistence::HighScoreStore;
pub use sim::{Game, Phase, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation cadence in milliseconds (~60 Hz)
    pub const TICK_MS: f64 = 16.0;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 4;

    /// Viewport height assumed until the host reports one
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 480.0;
    /// Distance from the bottom of the viewport to the ground line
    pub const GROUND_MARGIN: f32 = 130.0;

    /// Player sprite is square
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Fixed horizontal offset the player rests at
    pub const PLAYER_START_X: f32 = 100.0;
    /// Instantaneous upward displacement of a jump
    pub const JUMP_HEIGHT: f32 = 120.0;
    /// Real-time delay before an airborne player settles back to ground
    pub const JUMP_DURATION_MS: f64 = 600.0;

    /// Obstacle dimensions
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 60.0;

    /// Collectible sprite is square
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    /// Where the collectible starts at session reset
    pub const COLLECTIBLE_START_X: f32 = 700.0;
    /// Vertical clearance between ground and the collectible's bob centerline
    pub const COLLECTIBLE_CLEARANCE: f32 = 30.0;
    /// Collectible scrolls at this fraction of the obstacle speed
    pub const COLLECTIBLE_SPEED_FACTOR: f32 = 0.8;
    /// Amplitude of the sinusoidal bob (pixels)
    pub const BOB_AMPLITUDE: f32 = 20.0;
    /// Bob angular frequency (radians per wall-clock millisecond)
    pub const BOB_FREQUENCY: f64 = 0.01;

    /// New obstacles enter at the right edge
    pub const SPAWN_X: f32 = 800.0;
    /// No spawn while the newest obstacle is still right of this threshold
    pub const SPAWN_TRAIL_THRESHOLD: f32 = 500.0;
    /// Per-tick spawn probability once the threshold clears
    pub const SPAWN_CHANCE: f32 = 0.25;
    /// Collectible respawns at SPAWN_X plus up to this much jitter
    pub const RESPAWN_JITTER: f32 = 200.0;

    /// Scroll speed floor at session start (pixels per tick)
    pub const SPEED_FLOOR: f32 = 2.0;
    /// Per-tick speed increase
    pub const SPEED_RAMP: f32 = 0.001;
    /// Speed never exceeds this
    pub const SPEED_CAP: f32 = 5.0;

    /// The player hitbox is shrunk by this much on every side (forgiveness)
    pub const HIT_PADDING: f32 = 16.0;
    /// Chebyshev catch radius between player and collectible anchors
    pub const CATCH_RADIUS: f32 = 50.0;
    /// Window after a catch during which the collectible is not re-tested
    pub const CATCH_COOLDOWN_MS: f64 = 200.0;

    /// Raw score gained per catch
    pub const CATCH_BONUS: u64 = 100;
    /// Display score is raw divided by this
    pub const DISPLAY_DIVISOR: u64 = 10;

    /// Restart stays gated for this long after a game over
    pub const RESTART_DELAY_MS: f64 = 500.0;
    /// New-record banner lifetime
    pub const RECORD_BANNER_MS: f64 = 3000.0;
}

/// Ground line (y of the ground's top edge) for a given viewport height
#[inline]
pub fn ground_level(viewport_height: f32) -> f32 {
    viewport_height - consts::GROUND_MARGIN
}
