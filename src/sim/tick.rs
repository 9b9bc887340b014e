//! Fixed timestep simulation tick and the game state machine
//!
//! A tick mutates in a fixed order: advance motion, spawn, collision test,
//! catch test, score/speed update. Catch and collision always see the
//! post-advance positions. A detected collision ends the tick after the
//! mutation phase: the catch/score/speed sub-phases of that tick are
//! discarded and the game-over transition runs exactly once, no matter how
//! many obstacles overlap the player.
//!
//! Hosts drive two clocks: `tick` at the fixed cadence while Playing, and
//! `advance_timers` every frame regardless of phase (the restart gate has to
//! open while no ticks are running).

use super::collision::{catches_collectible, hits_obstacle};
use super::state::{Collectible, Game, Obstacle, Phase};
use super::timer::TimerEffect;
use crate::consts::*;

impl Game {
    /// Start intent: begins a session from the title or game-over screen.
    /// Gated by the restart cooldown; ignored in any other state.
    pub fn on_start(&mut self, now_ms: f64) {
        match self.phase {
            Phase::Start | Phase::GameOver if self.restart_allowed => {
                self.start_session(now_ms);
            }
            _ => {
                log::debug!("Ignoring start intent in {:?}", self.phase);
            }
        }
    }

    /// Jump intent: a single ballistic hop, modeled as an instant up-step
    /// plus a delayed settle. Re-entrant requests while airborne are no-ops;
    /// the intent is ignored outside Playing.
    pub fn on_jump(&mut self, now_ms: f64) {
        if self.phase != Phase::Playing || self.player.airborne {
            return;
        }
        self.player.airborne = true;
        self.player.pos.y -= JUMP_HEIGHT;
        self.timers.schedule(
            now_ms + JUMP_DURATION_MS,
            self.generation,
            TimerEffect::SettleJump,
        );
    }

    /// Advance the simulation by one tick. No-op outside Playing.
    ///
    /// `now_ms` is the host's wall clock; the collectible bob is a function
    /// of it rather than of the tick count, so two runs with identical tick
    /// counts but different pacing bob differently. Existing behavior, kept.
    pub fn tick(&mut self, now_ms: f64) {
        if self.phase != Phase::Playing {
            return;
        }
        self.time_ticks += 1;

        // Motion
        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= self.speed;
        }
        self.obstacles.retain(|o| !o.off_screen());

        self.collectible.pos.x -= self.speed * COLLECTIBLE_SPEED_FACTOR;
        self.collectible.pos.y = Collectible::bob_centerline(self.ground)
            + ((now_ms * BOB_FREQUENCY).sin() as f32) * BOB_AMPLITUDE;
        if self.collectible.pos.x < -COLLECTIBLE_SIZE {
            self.collectible.pos.x = self.spawner.respawn_x();
        }

        // Spawn
        if let Some(x) = self.spawner.maybe_spawn_obstacle(&self.obstacles) {
            let id = self.next_obstacle_id();
            let ground = self.ground;
            self.obstacles.push(Obstacle::new(id, x, ground));
        }

        // Collision: any hit ends the session; the transition runs once,
        // after the mutation phase above has committed
        let hit = self
            .obstacles
            .iter()
            .any(|o| hits_obstacle(self.player.pos, o.pos));
        if hit {
            self.enter_game_over(now_ms);
            return;
        }

        // Catch: skipped during the just-caught cooldown so a single catch
        // can't be double-counted
        if !self.collectible.just_caught
            && catches_collectible(self.player.pos, self.collectible.pos)
        {
            self.collectible.just_caught = true;
            self.score.add_catch_bonus();
            self.timers.schedule(
                now_ms + CATCH_COOLDOWN_MS,
                self.generation,
                TimerEffect::FinishCatchCooldown,
            );
            log::debug!("Collectible caught at tick {}", self.time_ticks);
        }

        // Score and difficulty ramp
        self.score.tick();
        self.speed = (self.speed + SPEED_RAMP).min(SPEED_CAP);
    }

    /// Fire all due one-shot timers. Host-driven every frame, in every phase.
    pub fn advance_timers(&mut self, now_ms: f64) {
        for effect in self.timers.drain_due(now_ms, self.generation) {
            match effect {
                TimerEffect::SettleJump => {
                    if self.player.airborne {
                        self.player.pos.y = self.ground - PLAYER_SIZE;
                        self.player.airborne = false;
                    }
                }
                TimerEffect::OpenRestartGate => {
                    self.restart_allowed = true;
                }
                TimerEffect::ExpireRecordBanner => {
                    self.score.clear_record_banner();
                }
                TimerEffect::FinishCatchCooldown => {
                    self.collectible.just_caught = false;
                    self.collectible.pos.x = self.spawner.respawn_x();
                }
            }
        }
    }

    /// Transition into Playing: fresh entities, zeroed session score, floor
    /// speed. Bumping the generation invalidates every outstanding timer of
    /// the previous session.
    fn start_session(&mut self, _now_ms: f64) {
        self.generation += 1;
        self.reset_entities();
        self.score.reset();
        self.speed = SPEED_FLOOR;
        self.restart_allowed = true;
        self.time_ticks = 0;
        self.phase = Phase::Playing;
        log::info!("Session started (generation {})", self.generation);
    }

    /// Transition into GameOver: finalize the score, close the restart gate
    /// and schedule it to reopen. Timers for the banner and the gate are
    /// scheduled under the new generation so they survive the bump.
    fn enter_game_over(&mut self, now_ms: f64) {
        self.generation += 1;
        self.phase = Phase::GameOver;
        self.restart_allowed = false;

        let new_record = self.score.finalize();
        self.timers.schedule(
            now_ms + RESTART_DELAY_MS,
            self.generation,
            TimerEffect::OpenRestartGate,
        );
        if new_record {
            self.timers.schedule(
                now_ms + RECORD_BANNER_MS,
                self.generation,
                TimerEffect::ExpireRecordBanner,
            );
        }

        log::info!(
            "Game over: score {} (high {}{})",
            self.score.display(),
            self.score.high(),
            if new_record { ", new record" } else { "" }
        );
    }
}
