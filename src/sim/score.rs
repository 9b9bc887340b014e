//! Score bookkeeping and high-score finalization
//!
//! Raw score accumulates per tick and per catch; the display score is the raw
//! value divided by ten. The persisted high score only ever moves up, and only
//! at game over. A failed write is a warning, never a session-ending error:
//! the in-memory value still updates for the rest of the process lifetime.

use crate::consts::{CATCH_BONUS, DISPLAY_DIVISOR};
use crate::persistence::HighScoreStore;

pub struct ScoreKeeper {
    raw: u64,
    high: u64,
    new_record: bool,
    store: Box<dyn HighScoreStore>,
}

impl ScoreKeeper {
    /// Create a keeper, loading the persisted high score. Absent or malformed
    /// stored values fall back to zero.
    pub fn new(mut store: Box<dyn HighScoreStore>) -> Self {
        let high = match store.read() {
            Ok(Some(high)) => {
                log::info!("Loaded high score: {high}");
                high
            }
            Ok(None) => 0,
            Err(e) => {
                log::warn!("Failed to load high score, starting from 0: {e}");
                0
            }
        };
        Self {
            raw: 0,
            high,
            new_record: false,
            store,
        }
    }

    /// Zero the session counters for a fresh run
    pub fn reset(&mut self) {
        self.raw = 0;
        self.new_record = false;
    }

    /// Per-tick increment
    pub fn tick(&mut self) {
        self.raw += 1;
    }

    /// Bonus for catching the collectible
    pub fn add_catch_bonus(&mut self) {
        self.raw += CATCH_BONUS;
    }

    pub fn raw(&self) -> u64 {
        self.raw
    }

    /// Score shown to the player
    pub fn display(&self) -> u64 {
        self.raw / DISPLAY_DIVISOR
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    /// True while the celebratory banner should be visible
    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    /// Banner expiry (driven by a timer at game over + 3s)
    pub fn clear_record_banner(&mut self) {
        self.new_record = false;
    }

    /// Settle the just-ended session against the high score. Persists and
    /// returns true on a strict improvement.
    pub fn finalize(&mut self) -> bool {
        let display = self.display();
        if display <= self.high {
            return false;
        }
        self.high = display;
        self.new_record = true;
        if let Err(e) = self.store.write(display) {
            log::warn!("Failed to persist high score {display}: {e}");
        } else {
            log::info!("New high score persisted: {display}");
        }
        true
    }
}
