//! Grid module - cell storage, neighbor links and the generation sweep
//!
//! Cells live in one flat, row-major `Vec` (index = `row * width + col`).
//! Each cell stores the flat indices of its in-bounds Moore neighbors, computed
//! once right after the cells are created. Indices rather than references keep
//! the neighbor graph free of ownership cycles.
//!
//! The grid does not wrap: corner cells have 3 neighbors, other edge cells 5,
//! interior cells 8.
//!
//! A generation is two separate passes:
//!
//! 1. [`Grid::compute`] reads only `alive` and writes only `next`
//! 2. [`Grid::commit`] copies `next` into `alive`
//!
//! Rendering happens in between, so what gets drawn is always the generation
//! the next states were computed from.

use std::fmt;
use std::hash::Hasher;

use arrayvec::ArrayVec;

use crate::error::{ConfigIssue, Result};
use crate::rng::CellSeed;
use crate::rules::Rules;
use crate::types::Position;

/// Neighbor indices of one cell (at most 8)
pub type Neighbors = ArrayVec<usize, 8>;

/// One grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    /// Only meaningful between `compute` and `commit`.
    next: bool,
    position: Position,
    neighbors: Neighbors,
}

impl Cell {
    fn new(position: Position, alive: bool) -> Self {
        Self {
            alive,
            next: false,
            position,
            neighbors: Neighbors::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// State computed for the upcoming generation.
    pub fn next(&self) -> bool {
        self.next
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Flat indices of the neighboring cells.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
}

/// Fixed-size, non-wrapping matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid with every cell drawn independently from `seed`.
    pub fn random<S: CellSeed + ?Sized>(width: usize, height: usize, seed: &mut S) -> Result<Self> {
        Self::from_fn(width, height, |_| seed.next_alive())
    }

    /// Build a grid whose initial states come from `alive_at`.
    ///
    /// `alive_at` is called exactly once per cell, in row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut alive_at: impl FnMut(Position) -> bool,
    ) -> Result<Self> {
        check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let position = Position::new(row, col);
                cells.push(Cell::new(position, alive_at(position)));
            }
        }

        let mut grid = Self {
            width,
            height,
            cells,
        };
        grid.link_neighbors();
        Ok(grid)
    }

    /// Build a grid where exactly the listed positions start alive.
    ///
    /// Positions outside the grid are ignored.
    pub fn from_pattern(width: usize, height: usize, alive: &[Position]) -> Result<Self> {
        check_dimensions(width, height)?;

        let mut flags = vec![false; width * height];
        for p in alive {
            if p.row < height && p.col < width {
                flags[p.row * width + p.col] = true;
            }
        }
        Self::from_fn(width, height, |p| flags[p.row * width + p.col])
    }

    fn link_neighbors(&mut self) {
        let (width, height) = (self.width, self.height);

        for cell in &mut self.cells {
            let Position { row, col } = cell.position;
            let mut links = Neighbors::new();

            for dr in -1isize..=1 {
                for dc in -1isize..=1 {
                    // (0, 0) is the cell itself
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                    else {
                        continue;
                    };
                    if r < height && c < width {
                        links.push(r * width + c);
                    }
                }
            }

            cell.neighbors = links;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat index of `(row, col)`, or None if out of bounds.
    #[inline(always)]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index_of(row, col).map(|i| &self.cells[i])
    }

    /// Out-of-bounds positions read as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_alive)
    }

    pub fn neighbors(&self, row: usize, col: usize) -> Option<&[usize]> {
        self.cell(row, col).map(Cell::neighbors)
    }

    /// Live neighbor count of `(row, col)` in the current generation.
    pub fn live_neighbors(&self, row: usize, col: usize) -> Option<u8> {
        self.index_of(row, col).map(|i| self.count_live_neighbors(i))
    }

    #[inline(always)]
    fn count_live_neighbors(&self, index: usize) -> u8 {
        self.cells[index]
            .neighbors
            .iter()
            .filter(|&&n| self.cells[n].alive)
            .count() as u8
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Positions of all live cells, row-major.
    pub fn alive_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().filter(|c| c.alive).map(|c| c.position)
    }

    /// Compute phase: fill every cell's `next` from the current generation.
    pub fn compute(&mut self, rules: &Rules) {
        for i in 0..self.cells.len() {
            let n = self.count_live_neighbors(i);
            let cell = &mut self.cells[i];
            cell.next = rules.next_state(cell.alive, n);
        }
    }

    /// Commit phase: the computed generation becomes the current one.
    pub fn commit(&mut self) {
        for cell in &mut self.cells {
            cell.alive = cell.next;
        }
    }

    /// Redraw every cell's state from `seed`, keeping neighbor links.
    pub fn reseed<S: CellSeed + ?Sized>(&mut self, seed: &mut S) {
        for cell in &mut self.cells {
            cell.alive = seed.next_alive();
            cell.next = false;
        }
    }

    /// Stable 64-bit hash of dimensions and live cells.
    ///
    /// Uses FNV-1a rather than `DefaultHasher`, whose output may change across
    /// Rust releases.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        h.write_usize(self.width);
        h.write_usize(self.height);
        for chunk in self.cells.chunks(8) {
            let mut byte = 0u8;
            for (bit, cell) in chunk.iter().enumerate() {
                byte |= (cell.alive as u8) << bit;
            }
            h.write_u8(byte);
        }
        h.finish()
    }
}

impl fmt::Display for Grid {
    /// `#` for live cells, `.` for dead ones, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                f.write_str(if cell.alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ConfigIssue::EmptyGrid { width, height }.into());
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
