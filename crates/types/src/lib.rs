//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the engine,
//! the terminal renderer and the input mapping can all agree on it.
//!
//! # Rule Defaults
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | `DEFAULT_UNDER_POPULATION` | 2 | Fewest live neighbors a live cell survives with |
//! | `DEFAULT_OVER_POPULATION` | 3 | Most live neighbors a live cell survives with |
//! | `DEFAULT_REPRODUCTION` | 3 | Exact live neighbors that bring a dead cell to life |
//!
//! # Frame Timing
//!
//! Timing values are in milliseconds. One generation advances per frame.
//!
//! | Constant | Value |
//! |----------|-------|
//! | `DEFAULT_FRAME_MS` | 16 |
//! | `MIN_FRAME_MS` | 16 |
//! | `MAX_FRAME_MS` | 2000 |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{Palette, Position, Rgb};
//!
//! let palette = Palette::default();
//! assert_eq!(palette.fill_for(true), Some(Rgb::BLACK));
//!
//! let p = Position::new(2, 3);
//! assert_eq!((p.row, p.col), (2, 3));
//! ```

/// Fewest live neighbors a live cell needs to survive.
pub const DEFAULT_UNDER_POPULATION: u8 = 2;

/// Most live neighbors a live cell can have and still survive.
pub const DEFAULT_OVER_POPULATION: u8 = 3;

/// Live neighbor count at which a dead cell is born.
pub const DEFAULT_REPRODUCTION: u8 = 3;

/// Upper bound of the Moore neighborhood.
pub const MAX_NEIGHBORS: u8 = 8;

/// Default grid width in cells (50 columns)
pub const DEFAULT_GRID_WIDTH: usize = 50;

/// Default grid height in cells (50 rows)
pub const DEFAULT_GRID_HEIGHT: usize = 50;

/// One animation frame (16ms ≈ 60 FPS)
pub const DEFAULT_FRAME_MS: u32 = 16;

/// Fastest frame interval the clock accepts.
pub const MIN_FRAME_MS: u32 = 16;

/// Slowest frame interval the clock accepts.
pub const MAX_FRAME_MS: u32 = 2000;

/// Logical grid coordinate. Immutable once a cell is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Axis-aligned rectangle in surface units.
///
/// Units are whatever the surface reports for its own size; for the terminal
/// framebuffer one unit is one character cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors handed to the surface for every cell draw.
///
/// `dead` and `border` are optional: `None` means "leave the surface's own
/// background" and "no border" respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Rgb,
    pub dead: Option<Rgb>,
    pub border: Option<Rgb>,
}

impl Palette {
    pub const fn new(alive: Rgb, dead: Option<Rgb>, border: Option<Rgb>) -> Self {
        Self {
            alive,
            dead,
            border,
        }
    }

    /// Fill color for a cell in the given state.
    #[inline]
    pub fn fill_for(&self, alive: bool) -> Option<Rgb> {
        if alive {
            Some(self.alive)
        } else {
            self.dead
        }
    }
}

impl Default for Palette {
    /// Black live cells on white, with black borders.
    fn default() -> Self {
        Self::new(Rgb::BLACK, Some(Rgb::WHITE), Some(Rgb::BLACK))
    }
}

/// User-facing actions the runner understands.
///
/// None of these reach into the engine's rule logic: they only drive the frame
/// clock or ask for a fresh grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeAction {
    /// Stop or resume the frame clock
    TogglePause,
    /// Advance exactly one generation (useful while paused)
    Step,
    /// Replace the grid with a freshly randomized one
    Reseed,
    /// Halve the frame interval
    Faster,
    /// Double the frame interval
    Slower,
}
