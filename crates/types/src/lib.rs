//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Car Geometry
//!
//! Every car (player and obstacle) shares the same footprint:
//!
//! - **Width**: 3 columns
//! - **Height**: 4 rows
//! - **Lanes**: 3, separated by 1 column of padding
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 100 | Input poll timeout at level 0 |
//! | `TICK_STEP_MS` | 10 | Timeout reduction per level |
//! | `MIN_TICK_MS` | 50 | Fastest tick, reached at level 5 |
//!
//! # Difficulty
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_CHANCE_PERCENT` | 30 | Chance per tick of attempting a spawn |
//! | `DOUBLE_SPAWN_GAP_ROWS` | 9 | Minimum gap for back-to-back spawns |
//! | `MAX_DIFFICULTY` | 10 | Cap applied to the level when biasing spawns |
//! | `POINTS_PER_LEVEL` | 10 | Reaped cars per level |
//!
//! # Examples
//!
//! ```
//! use tui_racer_types::{CAR_HEIGHT, CAR_WIDTH};
//!
//! assert_eq!(CAR_WIDTH, 3);
//! assert_eq!(CAR_HEIGHT, 4);
//! ```

/// Car width in columns
pub const CAR_WIDTH: u16 = 3;

/// Car height in rows
pub const CAR_HEIGHT: u16 = 4;

/// Number of lanes on the road
pub const LANE_COUNT: usize = 3;

/// Blank columns between lanes and around the road
pub const LANE_PADDING: u16 = 1;

/// Smallest playable display height (rows)
pub const MIN_DISPLAY_HEIGHT: u16 = 20;

/// Smallest playable display width (columns)
pub const MIN_DISPLAY_WIDTH: u16 = 40;

/// Player row as a percentage of the game panel height
pub const PLAYER_ROW_PERCENT: u16 = 60;

/// Chance (out of 100) that a tick attempts to spawn an obstacle
pub const SPAWN_CHANCE_PERCENT: u32 = 30;

/// Upper bound of the double-spawn draw (inclusive)
pub const DOUBLE_SPAWN_DRAW_MAX: u32 = 10;

/// Minimum vertical gap (rows) between a double spawn and the previous car
pub const DOUBLE_SPAWN_GAP_ROWS: u16 = 9;

/// Difficulty values above this behave the same
pub const MAX_DIFFICULTY: u32 = 10;

/// Rows from the bottom of the game panel at which an obstacle is reaped
pub const REAP_MARGIN_ROWS: u16 = 4;

/// Score needed per level
pub const POINTS_PER_LEVEL: u32 = 10;

/// Input poll timeout at level 0
pub const BASE_TICK_MS: u32 = 100;

/// Timeout reduction per level
pub const TICK_STEP_MS: u32 = 10;

/// Lower bound on the input poll timeout
pub const MIN_TICK_MS: u32 = 50;

/// Hint lines printed on the score panel
pub const QUIT_HINT: &str = "Press q to quit";
pub const PAUSE_HINT: &str = "Press p to pause";
pub const STEER_HINT: &str = "Arrows to steer";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_TICK_MS, 100);
        assert_eq!(TICK_STEP_MS, 10);
        assert_eq!(MIN_TICK_MS, 50);
        // Floor is reached exactly at level 5.
        assert_eq!(BASE_TICK_MS - 5 * TICK_STEP_MS, MIN_TICK_MS);
    }

    #[test]
    fn minimum_display_fits_both_panels() {
        let road = LANE_PADDING * 2
            + (CAR_WIDTH + LANE_PADDING) * (LANE_COUNT as u16 - 1)
            + CAR_WIDTH
            + LANE_PADDING;
        let panel = PAUSE_HINT.len() as u16 + LANE_PADDING * 2;
        assert!(road + panel <= MIN_DISPLAY_WIDTH);
    }
}

/// Player commands produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// End the session
    Quit,
    /// Toggle pause
    Pause,
    /// Move one lane to the left
    SteerLeft,
    /// Move one lane to the right
    SteerRight,
}

/// What a render surface should put in a single cell.
///
/// Surfaces decide the concrete character and colour; core only says what
/// occupies the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    #[default]
    Blank,
    Player,
    Obstacle,
}

impl Glyph {
    pub fn is_blank(&self) -> bool {
        matches!(self, Glyph::Blank)
    }
}
