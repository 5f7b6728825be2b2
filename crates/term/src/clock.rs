//! FrameClock: decides when the runner advances the next generation.
//!
//! Time is passed in as milliseconds since an arbitrary origin so the clock can
//! be driven deterministically in tests.

use crate::types::{MAX_FRAME_MS, MIN_FRAME_MS};

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: u32,
    last_tick_ms: u64,
    paused: bool,
}

impl FrameClock {
    /// `interval_ms` is clamped to `MIN_FRAME_MS..=MAX_FRAME_MS`.
    pub fn new(interval_ms: u32, now_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.clamp(MIN_FRAME_MS, MAX_FRAME_MS),
            last_tick_ms: now_ms,
            paused: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self, now_ms: u64) {
        self.paused = !self.paused;
        // Resume with a full interval rather than an immediate catch-up tick.
        self.last_tick_ms = now_ms;
    }

    pub fn faster(&mut self) {
        self.interval_ms = (self.interval_ms / 2).max(MIN_FRAME_MS);
    }

    pub fn slower(&mut self) {
        self.interval_ms = self.interval_ms.saturating_mul(2).min(MAX_FRAME_MS);
    }

    /// How long the runner may block on input before the next frame is due.
    ///
    /// While paused this is one interval, so input keeps being polled.
    pub fn timeout_ms(&self, now_ms: u64) -> u64 {
        if self.paused {
            return self.interval_ms as u64;
        }
        let due = self.last_tick_ms + self.interval_ms as u64;
        due.saturating_sub(now_ms)
    }

    /// True exactly once per elapsed interval while running.
    ///
    /// Missed frames are dropped, not replayed: a slow terminal gets one
    /// generation per call, never a burst.
    pub fn poll_tick(&mut self, now_ms: u64) -> bool {
        if self.paused {
            return false;
        }
        if now_ms.saturating_sub(self.last_tick_ms) >= self.interval_ms as u64 {
            self.last_tick_ms = now_ms;
            return true;
        }
        false
    }
}
