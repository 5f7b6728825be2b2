//! LifeView: screen layout around the engine's board.
//!
//! Row 0 is a status bar; everything below belongs to the board. This module is
//! pure (no I/O) and allocation-free once the framebuffer is sized.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::LifeEngine;
use crate::fb::{FrameBuffer, Region, Style};
use crate::types::Rgb;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board sits on screen, fixed for the engine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Runner state shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub paused: bool,
    pub frame_ms: u32,
}

/// Lays out the status bar and board.
#[derive(Debug, Clone)]
pub struct LifeView {
    status: Style,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            status: Style {
                fg: Rgb::new(20, 20, 20),
                bg: Rgb::new(200, 200, 200),
            },
        }
    }
}

impl LifeView {
    pub const STATUS_ROWS: u16 = 1;

    /// Board area for a viewport: full width, everything under the status bar.
    pub fn board_area(&self, viewport: Viewport) -> BoardArea {
        BoardArea {
            x: 0,
            y: Self::STATUS_ROWS,
            width: viewport.width,
            height: viewport.height.saturating_sub(Self::STATUS_ROWS),
        }
    }

    /// Largest grid where each cell gets two columns and one row.
    ///
    /// Terminal glyphs are roughly twice as tall as wide, so 2x1 keeps cells
    /// close to square.
    pub fn fitted_grid(&self, viewport: Viewport) -> (usize, usize) {
        let area = self.board_area(viewport);
        (
            (area.width / 2).max(1) as usize,
            area.height.max(1) as usize,
        )
    }

    /// Borrow the board area of `fb` as a render surface.
    pub fn board<'a>(&self, fb: &'a mut FrameBuffer, area: BoardArea) -> Region<'a> {
        Region::new(fb, area.x, area.y, area.width, area.height)
    }

    /// Draw the status bar for the engine's current state.
    pub fn draw_status(&self, fb: &mut FrameBuffer, engine: &LifeEngine, line: StatusLine) {
        for x in 0..fb.width() {
            fb.set(x, 0, self.status.into_glyph(' '));
        }

        let text = status_text(engine.generation(), engine.live_count(), line);
        fb.put_str(0, 0, &text, self.status);
    }
}

/// 78 fixed bytes plus at most 20 + 20 + 10 digits.
const STATUS_CAPACITY: usize = 128;

fn status_text(generation: u64, live: usize, line: StatusLine) -> ArrayString<STATUS_CAPACITY> {
    let mut text = ArrayString::new();
    let written = write!(
        text,
        " gen {}  live {}  {}ms{}  | space pause  . step  r reseed  +/- speed  q quit",
        generation,
        live,
        line.frame_ms,
        if line.paused { "  [paused]" } else { "" },
    );
    debug_assert!(written.is_ok(), "status line exceeds {} bytes", STATUS_CAPACITY);
    text
}
