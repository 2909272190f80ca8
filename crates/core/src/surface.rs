//! Collaborator traits for drawing and keyboard input.
//!
//! The session only talks to these traits; the terminal crates provide the
//! real implementations and tests provide in-memory ones.

use std::io;

use crate::types::{GameAction, Glyph};

/// A 2D character grid addressed as `(row, col)` from the top-left corner.
///
/// Writes outside the grid are ignored.
pub trait RenderSurface {
    /// `(height, width)` in cells.
    fn dimensions(&self) -> (u16, u16);

    fn write_cell(&mut self, row: u16, col: u16, glyph: Glyph);

    fn clear_cell(&mut self, row: u16, col: u16) {
        self.write_cell(row, col, Glyph::Blank);
    }

    fn write_text(&mut self, row: u16, col: u16, text: &str);

    /// Flush pending writes to the backing display.
    fn refresh(&mut self) -> io::Result<()>;
}

/// A non-blocking key reader.
pub trait InputSource {
    /// Wait at most the configured timeout for one key.
    ///
    /// `Ok(None)` means nothing relevant was pressed before the timeout.
    fn poll_key(&mut self) -> io::Result<Option<GameAction>>;

    fn set_timeout(&mut self, timeout_ms: u32);
}
