//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the Game of Life engine. It has **no dependencies** on a
//! terminal, a window or a clock:
//!
//! - **Deterministic**: the same seed produces the same grid and the same history
//! - **Allocation-free stepping**: neighbor lists are built once at construction
//! - **Portable**: drawing goes through the [`Surface`] trait
//!
//! # Module Structure
//!
//! - [`grid`]: flat cell storage, neighbor precomputation, compute/commit passes
//! - [`rules`]: the parameterized survival/birth rule
//! - [`engine`]: [`LifeEngine`], the compute → render → commit cycle
//! - [`surface`]: drawing interface and grid-to-pixel mapping
//! - [`rng`]: seedable source of initial states
//! - [`patterns`]: block, blinker, glider and friends
//! - [`error`]: construction errors
//!
//! # Example
//!
//! ```
//! use tui_life_core::{EngineConfig, LifeEngine, RecordingSurface};
//!
//! let mut engine = LifeEngine::with_seed(EngineConfig::new(20, 10), (40.0, 10.0), 42).unwrap();
//! let mut surface = RecordingSurface::new(40.0, 10.0);
//!
//! engine.step(&mut surface);
//!
//! assert_eq!(surface.calls().len(), 200);
//! assert_eq!(engine.generation(), 1);
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rng;
pub mod rules;
pub mod surface;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use engine::{EngineConfig, LifeEngine};
pub use error::{ConfigIssue, LifeError};
pub use grid::{Cell, Grid};
pub use patterns::Pattern;
pub use rng::{AllDead, CellSeed, SimpleRng};
pub use rules::Rules;
pub use surface::{CellGeometry, DrawCall, RecordingSurface, Surface};
