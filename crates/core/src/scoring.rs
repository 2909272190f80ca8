//! Score, level and tick speed.
//!
//! - One point per reaped obstacle
//! - Level is `score / POINTS_PER_LEVEL`
//! - The input timeout shrinks by `TICK_STEP_MS` per level down to `MIN_TICK_MS`

use crate::types::{BASE_TICK_MS, MIN_TICK_MS, POINTS_PER_LEVEL, TICK_STEP_MS};

/// Level reached with `score` points.
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL
}

/// Input poll timeout in milliseconds at `level`.
pub fn tick_timeout_ms(level: u32) -> u32 {
    BASE_TICK_MS
        .saturating_sub(level.saturating_mul(TICK_STEP_MS))
        .max(MIN_TICK_MS)
}

/// Running score. The level is always derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    score: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    pub fn tick_timeout_ms(&self) -> u32 {
        tick_timeout_ms(self.level())
    }

    /// Add points. Returns the new level if it changed.
    pub fn add(&mut self, points: u32) -> Option<u32> {
        let before = self.level();
        self.score = self.score.saturating_add(points);
        let after = self.level();
        (after != before).then_some(after)
    }
}
