//! Window: a bordered rectangle of the screen that implements `RenderSurface`.
//!
//! Writes land in a private framebuffer. `refresh()` diffs it against what was
//! last flushed and writes only the changed runs, offset to the window's place
//! on screen. The border belongs to the window: cell and text writes that fall
//! on it are dropped.

use std::io::{self, Write};

use crate::core::{Rect, RenderSurface};
use crate::fb::{FrameBuffer, Palette};
use crate::renderer::{encode_diff_into, encode_full_into};
use crate::types::Glyph;

pub struct Window<W: Write> {
    area: Rect,
    fb: FrameBuffer,
    last: Option<FrameBuffer>,
    palette: Palette,
    out: W,
    buf: Vec<u8>,
}

impl Window<io::Stdout> {
    /// A window that flushes to stdout.
    pub fn stdout(area: Rect) -> Self {
        Self::new(area, io::stdout())
    }
}

impl<W: Write> Window<W> {
    pub fn new(area: Rect, out: W) -> Self {
        Self::with_palette(area, out, Palette::default())
    }

    pub fn with_palette(area: Rect, out: W, palette: Palette) -> Self {
        let mut fb = FrameBuffer::new(area.width, area.height);
        fb.draw_border(palette.border);
        Self {
            area,
            fb,
            last: None,
            palette,
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Pending contents, border included.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn is_border(&self, row: u16, col: u16) -> bool {
        row == 0
            || col == 0
            || row >= self.area.height.saturating_sub(1)
            || col >= self.area.width.saturating_sub(1)
    }
}

impl<W: Write> RenderSurface for Window<W> {
    fn dimensions(&self) -> (u16, u16) {
        (self.area.height, self.area.width)
    }

    fn write_cell(&mut self, row: u16, col: u16, glyph: Glyph) {
        if self.is_border(row, col) {
            return;
        }
        self.fb.set(col, row, self.palette.cell(glyph));
    }

    fn write_text(&mut self, row: u16, col: u16, text: &str) {
        let style = self.palette.text;
        for (i, ch) in text.chars().enumerate() {
            let Some(c) = col.checked_add(i as u16) else {
                break;
            };
            if self.is_border(row, c) {
                continue;
            }
            self.fb.put_char(c, row, ch, style);
        }
    }

    fn refresh(&mut self) -> io::Result<()> {
        let origin = (self.area.x, self.area.y);
        self.buf.clear();
        match &self.last {
            Some(prev) => encode_diff_into(prev, &self.fb, origin, &mut self.buf)?,
            None => encode_full_into(&self.fb, origin, &mut self.buf)?,
        }

        if !self.buf.is_empty() {
            self.out.write_all(&self.buf)?;
            self.out.flush()?;
        }

        match self.last.as_mut() {
            Some(prev) => prev.clone_from(&self.fb),
            None => self.last = Some(self.fb.clone()),
        }
        Ok(())
    }
}
