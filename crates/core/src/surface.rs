//! Render surface interface and grid-to-pixel mapping.
//!
//! The engine never owns a drawing backend. It is handed something that can
//! report its size and fill a rectangle, and it maps grid positions into that
//! space with a [`CellGeometry`] fixed at construction.

use crate::error::{ConfigIssue, Result};
use crate::types::{PixelRect, Position, Rgb};

/// Drawing sink the engine renders into.
pub trait Surface {
    /// Reported `(width, height)` in surface units.
    fn size(&self) -> (f32, f32);

    /// Draw one cell. `fill: None` leaves the surface's own background;
    /// `border: None` draws no border.
    fn draw_cell(&mut self, rect: PixelRect, border: Option<Rgb>, fill: Option<Rgb>);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> (f32, f32) {
        (**self).size()
    }

    fn draw_cell(&mut self, rect: PixelRect, border: Option<Rgb>, fill: Option<Rgb>) {
        (**self).draw_cell(rect, border, fill)
    }
}

/// Per-cell pixel size, derived once from surface and grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    cell_width: f32,
    cell_height: f32,
}

impl CellGeometry {
    pub fn new(surface_width: f32, surface_height: f32, grid_width: usize, grid_height: usize) -> Result<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(surface_width) || !usable(surface_height) {
            return Err(ConfigIssue::EmptySurface {
                width: surface_width,
                height: surface_height,
            }
            .into());
        }
        if grid_width == 0 || grid_height == 0 {
            return Err(ConfigIssue::EmptyGrid {
                width: grid_width,
                height: grid_height,
            }
            .into());
        }

        Ok(Self {
            cell_width: surface_width / grid_width as f32,
            cell_height: surface_height / grid_height as f32,
        })
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// `(col * cell_width, row * cell_height, cell_width, cell_height)`
    #[inline]
    pub fn rect_for(&self, position: Position) -> PixelRect {
        PixelRect::new(
            position.col as f32 * self.cell_width,
            position.row as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }
}

/// One recorded `draw_cell` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub rect: PixelRect,
    pub border: Option<Rgb>,
    pub fill: Option<Rgb>,
}

/// Surface that keeps every draw call, for tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Preallocate room for `n` calls so recording does not allocate.
    pub fn with_capacity(width: f32, height: f32, n: usize) -> Self {
        Self {
            width,
            height,
            calls: Vec::with_capacity(n),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Forget recorded calls, keeping the allocation.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw_cell(&mut self, rect: PixelRect, border: Option<Rgb>, fill: Option<Rgb>) {
        self.calls.push(DrawCall { rect, border, fill });
    }
}
