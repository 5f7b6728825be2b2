//! Framebuffer and style types for terminal rendering.
//!
//! One terminal character is one surface unit, so a [`FrameBuffer`] (or a
//! [`Region`] of it) can be handed straight to the engine as its [`Surface`].

use crate::core::Surface;
use crate::types::{PixelRect, Rgb};

/// Glyph used for a cell's border: a thin bar on its left edge.
pub const BORDER_GLYPH: char = '▏';

/// Minimal per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

impl Style {
    pub fn into_glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

/// A single terminal character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Style::default().into_glyph(' ')
    }
}

/// 2D framebuffer of styled glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.glyphs.resize(len, Glyph::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `s` starting at `(x, y)`, truncated at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, style.into_glyph(ch));
            cx += 1;
        }
    }

    /// Paint one engine cell covering columns `xs` and rows `ys`.
    ///
    /// `fill` replaces the background (None keeps what is there). `border` is
    /// drawn as a thin bar in the leftmost column when the cell is at least two
    /// columns wide; narrower cells would be all border.
    fn paint(&mut self, xs: (u16, u16), ys: (u16, u16), border: Option<Rgb>, fill: Option<Rgb>) {
        let bordered = border.is_some() && xs.1.saturating_sub(xs.0) >= 2;
        for y in ys.0..ys.1 {
            for x in xs.0..xs.1 {
                let Some(i) = self.idx(x, y) else { continue };
                let glyph = &mut self.glyphs[i];
                if let Some(bg) = fill {
                    glyph.style.bg = bg;
                }
                match border {
                    Some(fg) if bordered && x == xs.0 => {
                        glyph.ch = BORDER_GLYPH;
                        glyph.style.fg = fg;
                    }
                    _ => glyph.ch = ' ',
                }
            }
        }
    }
}

/// Map `[start, end)` in surface units to whole columns/rows within `limit`.
///
/// Neighboring cells share an edge value, so flooring both ends tiles the
/// surface without gaps or overlap. The small bias absorbs float error in
/// products like `col * (w / cols)`.
fn span(start: f32, end: f32, limit: u16) -> (u16, u16) {
    let snap = |v: f32| (v + 1e-3).floor().clamp(0.0, limit as f32) as u16;
    (snap(start), snap(end))
}

impl Surface for FrameBuffer {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn draw_cell(&mut self, rect: PixelRect, border: Option<Rgb>, fill: Option<Rgb>) {
        let xs = span(rect.x, rect.right(), self.width);
        let ys = span(rect.y, rect.bottom(), self.height);
        self.paint(xs, ys, border, fill);
    }
}

/// A rectangular window into a framebuffer.
///
/// Reports its own size and translates/clips draws into the parent, so the
/// engine can render below a status bar without knowing about it.
pub struct Region<'a> {
    fb: &'a mut FrameBuffer,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

impl<'a> Region<'a> {
    pub fn new(fb: &'a mut FrameBuffer, x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            fb,
            x,
            y,
            width,
            height,
        }
    }
}

impl Surface for Region<'_> {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn draw_cell(&mut self, rect: PixelRect, border: Option<Rgb>, fill: Option<Rgb>) {
        let (x0, x1) = span(rect.x, rect.right(), self.width);
        let (y0, y1) = span(rect.y, rect.bottom(), self.height);
        // Parent bounds are enforced again by `paint`.
        self.fb.paint(
            (self.x.saturating_add(x0), self.x.saturating_add(x1)),
            (self.y.saturating_add(y0), self.y.saturating_add(y1)),
            border,
            fill,
        );
    }
}
