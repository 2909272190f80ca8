//! Framebuffer and style types for terminal rendering.

use crate::types::Glyph;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Character used for car cells (a checkerboard block).
pub const CAR_CHAR: char = '▒';

/// How glyphs, text and borders look on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub player: Cell,
    pub obstacle: Cell,
    pub blank: Cell,
    pub text: CellStyle,
    pub border: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: Cell {
                ch: CAR_CHAR,
                style: CellStyle {
                    bold: true,
                    ..CellStyle::fg(Rgb::new(80, 220, 220))
                },
            },
            obstacle: CellStyle::fg(Rgb::new(220, 80, 80)).into_cell(CAR_CHAR),
            blank: Cell::default(),
            text: CellStyle::default(),
            border: CellStyle::fg(Rgb::new(200, 200, 200)),
        }
    }
}

impl Palette {
    pub fn cell(&self, glyph: Glyph) -> Cell {
        match glyph {
            Glyph::Blank => self.blank,
            Glyph::Player => self.player,
            Glyph::Obstacle => self.obstacle,
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Row `y` as a plain string, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    /// Single-line box around the whole buffer.
    pub fn draw_border(&mut self, style: CellStyle) {
        let (w, h) = (self.width, self.height);
        if w < 2 || h < 2 {
            return;
        }

        self.put_char(0, 0, '┌', style);
        self.put_char(w - 1, 0, '┐', style);
        self.put_char(0, h - 1, '└', style);
        self.put_char(w - 1, h - 1, '┘', style);

        for x in 1..w - 1 {
            self.put_char(x, 0, '─', style);
            self.put_char(x, h - 1, '─', style);
        }
        for y in 1..h - 1 {
            self.put_char(0, y, '│', style);
            self.put_char(w - 1, y, '│', style);
        }
    }
}
