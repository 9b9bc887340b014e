//! Generation-tagged one-shot timers
//!
//! Delayed effects (jump settle, restart gate, banner expiry, catch cooldown)
//! are independent of the tick clock: they must fire even when no ticks run,
//! e.g. the restart gate opens while the game-over screen is up. Each entry is
//! tagged with the session generation it was scheduled under; the generation
//! bumps on every transition that replaces state, so a stale entry can never
//! mutate a newer session. Stale firings are dropped silently.

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    /// End of the jump arc: return the player to the ground
    SettleJump,
    /// End of the post-game-over cooldown: allow restarts again
    OpenRestartGate,
    /// Hide the new-record banner
    ExpireRecordBanner,
    /// End of the catch cooldown: clear the flag and respawn the collectible
    FinishCatchCooldown,
}

#[derive(Debug, Clone)]
struct Entry {
    fire_at_ms: f64,
    generation: u64,
    effect: TimerEffect,
}

/// One-shot timer queue, polled by the host with the current wall clock
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Entry>,
}

impl TimerQueue {
    /// Schedule an effect under the given generation
    pub fn schedule(&mut self, fire_at_ms: f64, generation: u64, effect: TimerEffect) {
        self.entries.push(Entry {
            fire_at_ms,
            generation,
            effect,
        });
    }

    /// Remove and return all effects due at `now_ms` whose generation still
    /// matches, in firing order. Due-but-stale entries are discarded.
    pub fn drain_due(&mut self, now_ms: f64, generation: u64) -> Vec<TimerEffect> {
        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|e| {
            if e.fire_at_ms <= now_ms {
                due.push(e.clone());
                false
            } else {
                true
            }
        });

        due.sort_by(|a, b| a.fire_at_ms.total_cmp(&b.fire_at_ms));
        due.into_iter()
            .filter(|e| {
                if e.generation == generation {
                    true
                } else {
                    log::debug!("Dropping stale {:?} (gen {} != {})", e.effect, e.generation, generation);
                    false
                }
            })
            .map(|e| e.effect)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_when_due() {
        let mut q = TimerQueue::default();
        q.schedule(100.0, 0, TimerEffect::SettleJump);
        assert!(q.drain_due(99.0, 0).is_empty());
        assert_eq!(q.drain_due(100.0, 0), vec![TimerEffect::SettleJump]);
        // One-shot: gone after firing
        assert!(q.is_empty());
    }

    #[test]
    fn test_stale_generation_dropped() {
        let mut q = TimerQueue::default();
        q.schedule(100.0, 0, TimerEffect::SettleJump);
        // Generation moved on before the timer came due
        assert!(q.drain_due(200.0, 1).is_empty());
        assert!(q.is_empty());
    }

    #[test]
    fn test_firing_order_by_due_time() {
        let mut q = TimerQueue::default();
        q.schedule(300.0, 0, TimerEffect::ExpireRecordBanner);
        q.schedule(100.0, 0, TimerEffect::OpenRestartGate);
        assert_eq!(
            q.drain_due(500.0, 0),
            vec![TimerEffect::OpenRestartGate, TimerEffect::ExpireRecordBanner]
        );
    }

    #[test]
    fn test_mixed_generations() {
        let mut q = TimerQueue::default();
        q.schedule(100.0, 0, TimerEffect::SettleJump);
        q.schedule(150.0, 1, TimerEffect::OpenRestartGate);
        assert_eq!(q.drain_due(200.0, 1), vec![TimerEffect::OpenRestartGate]);
    }
}
