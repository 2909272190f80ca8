//! Screen layout: where the road and the score panel go, and where the lanes are.

use crate::error::RaceError;
use crate::types::{
    CAR_WIDTH, LANE_COUNT, LANE_PADDING, MIN_DISPLAY_HEIGHT, MIN_DISPLAY_WIDTH, PAUSE_HINT,
    PLAYER_ROW_PERCENT, QUIT_HINT, STEER_HINT,
};

/// Columns between the road and the score panel.
const PANEL_GAP: u16 = 1;

/// A rectangle in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.x + self.width
    }
}

/// Lane columns inside the game panel, left to right.
///
/// The first lane sits `LANE_PADDING` in from the panel's left edge; each next
/// one is a car width plus padding further right.
pub fn lane_columns() -> [u16; LANE_COUNT] {
    let mut lanes = [0; LANE_COUNT];
    let mut col = LANE_PADDING;
    for lane in lanes.iter_mut() {
        *lane = col;
        col += CAR_WIDTH + LANE_PADDING;
    }
    lanes
}

/// Width of the bordered game panel.
pub fn game_panel_width() -> u16 {
    let last = lane_columns()[LANE_COUNT - 1];
    last + CAR_WIDTH + LANE_PADDING * 2
}

/// Width of the bordered score panel.
pub fn score_panel_width() -> u16 {
    let longest = [QUIT_HINT, PAUSE_HINT, STEER_HINT]
        .iter()
        .map(|s| s.chars().count() as u16)
        .max()
        .unwrap_or(0);
    longest + LANE_PADDING * 2
}

/// Validated placement of both panels on a display.
///
/// A `Layout` only exists for displays of at least
/// `MIN_DISPLAY_WIDTH x MIN_DISPLAY_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    display_height: u16,
    display_width: u16,
    game: Rect,
    score: Rect,
    lanes: [u16; LANE_COUNT],
}

impl Layout {
    /// Place the panels side by side, centred horizontally, full height.
    pub fn for_display(height: u16, width: u16) -> Result<Self, RaceError> {
        if height < MIN_DISPLAY_HEIGHT || width < MIN_DISPLAY_WIDTH {
            return Err(RaceError::SurfaceTooSmall {
                height,
                width,
                min_height: MIN_DISPLAY_HEIGHT,
                min_width: MIN_DISPLAY_WIDTH,
            });
        }

        let game_w = game_panel_width();
        let score_w = score_panel_width();
        let total = game_w + PANEL_GAP + score_w;
        let start_x = width.saturating_sub(total) / 2;

        let game = Rect::new(start_x, 0, game_w, height);
        let score = Rect::new(game.right() + PANEL_GAP, 0, score_w, height);

        Ok(Self {
            display_height: height,
            display_width: width,
            game,
            score,
            lanes: lane_columns(),
        })
    }

    /// `(height, width)` of the whole display.
    pub fn display(&self) -> (u16, u16) {
        (self.display_height, self.display_width)
    }

    pub fn game_panel(&self) -> Rect {
        self.game
    }

    pub fn score_panel(&self) -> Rect {
        self.score
    }

    pub fn lanes(&self) -> [u16; LANE_COUNT] {
        self.lanes
    }

    /// Row the player car lives on.
    pub fn player_row(&self) -> u16 {
        (self.game.height as u32 * PLAYER_ROW_PERCENT as u32 / 100) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_one_car_plus_padding_apart() {
        assert_eq!(lane_columns(), [1, 5, 9]);
        assert_eq!(game_panel_width(), 14);
    }

    #[test]
    fn rejects_short_display() {
        let err = Layout::for_display(19, 80).unwrap_err();
        assert!(matches!(
            err,
            RaceError::SurfaceTooSmall {
                height: 19,
                width: 80,
                ..
            }
        ));
    }

    #[test]
    fn rejects_narrow_display() {
        assert!(Layout::for_display(24, 39).is_err());
    }

    #[test]
    fn minimum_display_is_accepted() {
        let layout = Layout::for_display(20, 40).unwrap();
        assert!(layout.score_panel().right() <= 40);
        assert_eq!(layout.player_row(), 12);
    }

    #[test]
    fn panels_do_not_overlap_and_fit() {
        let layout = Layout::for_display(24, 80).unwrap();
        let game = layout.game_panel();
        let score = layout.score_panel();
        assert!(game.right() < score.x);
        assert!(score.right() <= 80);
        assert_eq!(game.height, 24);
        assert_eq!(score.height, 24);
        assert_eq!(layout.player_row(), 14);
    }
}
