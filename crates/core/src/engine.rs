//! Life engine - owns a grid and advances it one generation per frame
//!
//! The engine is an explicit value owned by the caller. It has no notion of
//! time: whoever drives the frames decides when [`LifeEngine::step`] runs, and
//! each call advances exactly one generation.
//!
//! Every step runs three phases in strict order:
//!
//! 1. **compute** - each cell's `next` from the current live neighbor counts
//! 2. **render** - each cell drawn with its current (pre-commit) state
//! 3. **commit** - `next` becomes `alive`
//!
//! Nothing is allocated after construction; neighbor lists are built once and
//! reused for every generation.

use log::{debug, trace};

use crate::error::Result;
use crate::grid::Grid;
use crate::rng::{CellSeed, SimpleRng};
use crate::rules::Rules;
use crate::surface::{CellGeometry, Surface};
use crate::types::{Palette, Position, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// Everything needed to build an engine except the initial states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub rules: Rules,
    pub palette: Palette,
}

impl EngineConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rules: Rules::default(),
            palette: Palette::default(),
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}

/// Game of Life simulation bound to a fixed surface size.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    grid: Grid,
    rules: Rules,
    palette: Palette,
    geometry: CellGeometry,
    generation: u64,
}

impl LifeEngine {
    /// Build an engine with every cell drawn from `seed`.
    ///
    /// `surface_size` is the size the target surface reports; it only feeds
    /// the pixel mapping. The surface itself is not touched.
    pub fn new<S: CellSeed + ?Sized>(
        config: EngineConfig,
        surface_size: (f32, f32),
        seed: &mut S,
    ) -> Result<Self> {
        let geometry = Self::validate(&config, surface_size)?;
        let grid = Grid::random(config.width, config.height, seed)?;
        Ok(Self::assemble(config, geometry, grid))
    }

    /// Build an engine from a [`SimpleRng`] seeded with `seed`.
    pub fn with_seed(config: EngineConfig, surface_size: (f32, f32), seed: u32) -> Result<Self> {
        Self::new(config, surface_size, &mut SimpleRng::new(seed))
    }

    /// Build an engine sized for `surface`, reading [`Surface::size`] once.
    ///
    /// Later size changes of the surface do not rescale the engine.
    pub fn for_surface<T, S>(config: EngineConfig, surface: &T, seed: &mut S) -> Result<Self>
    where
        T: Surface + ?Sized,
        S: CellSeed + ?Sized,
    {
        Self::new(config, surface.size(), seed)
    }

    /// Build an engine where exactly `alive` starts alive.
    pub fn from_pattern(
        config: EngineConfig,
        surface_size: (f32, f32),
        alive: &[Position],
    ) -> Result<Self> {
        let geometry = Self::validate(&config, surface_size)?;
        let grid = Grid::from_pattern(config.width, config.height, alive)?;
        Ok(Self::assemble(config, geometry, grid))
    }

    fn validate(config: &EngineConfig, surface_size: (f32, f32)) -> Result<CellGeometry> {
        config.rules.validate()?;
        CellGeometry::new(surface_size.0, surface_size.1, config.width, config.height)
    }

    fn assemble(config: EngineConfig, geometry: CellGeometry, grid: Grid) -> Self {
        debug!(
            "life engine {}x{} rules {:?} cell {}x{} live {}",
            grid.width(),
            grid.height(),
            config.rules,
            geometry.cell_width(),
            geometry.cell_height(),
            grid.live_count()
        );
        Self {
            grid,
            rules: config.rules,
            palette: config.palette,
            geometry,
            generation: 0,
        }
    }

    /// Advance one generation, drawing the current one into `surface`.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.grid.compute(&self.rules);
        self.render(surface);
        self.commit();
    }

    /// Advance one generation without drawing.
    pub fn advance(&mut self) {
        self.grid.compute(&self.rules);
        self.commit();
    }

    /// Draw the current generation without advancing.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let border = self.palette.border;
        for cell in self.grid.cells() {
            surface.draw_cell(
                self.geometry.rect_for(cell.position()),
                border,
                self.palette.fill_for(cell.is_alive()),
            );
        }
    }

    fn commit(&mut self) {
        self.grid.commit();
        self.generation += 1;
        trace!("generation {} live {}", self.generation, self.grid.live_count());
    }

    /// Redraw initial states from `seed` and restart the generation count.
    ///
    /// Dimensions and neighbor links are kept.
    pub fn reseed<S: CellSeed + ?Sized>(&mut self, seed: &mut S) {
        self.grid.reseed(seed);
        self.generation = 0;
        debug!("reseeded, live {}", self.grid.live_count());
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    /// Generations advanced since construction or the last reseed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    pub fn fingerprint(&self) -> u64 {
        self.grid.fingerprint()
    }
}
