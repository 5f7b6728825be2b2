//! Transition rule - maps (state, live neighbor count) to the next state.
//!
//! A generalization of Conway's B3/S23 with three independent thresholds:
//!
//! - a live cell survives while `under_population <= n <= over_population`
//! - a dead cell is born when `n == reproduction`
//!
//! Thresholds above 8 can never be met by a Moore neighborhood and are
//! rejected by [`Rules::validate`]. In-range but odd settings (for example
//! `under_population > over_population`) are accepted and simply make that
//! branch of the rule unsatisfiable.

use crate::error::{ConfigIssue, Result};
use crate::types::{
    DEFAULT_OVER_POPULATION, DEFAULT_REPRODUCTION, DEFAULT_UNDER_POPULATION, MAX_NEIGHBORS,
};

/// Rule parameters for one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    pub under_population: u8,
    pub over_population: u8,
    pub reproduction: u8,
}

impl Rules {
    pub const fn new(under_population: u8, over_population: u8, reproduction: u8) -> Self {
        Self {
            under_population,
            over_population,
            reproduction,
        }
    }

    /// Standard B3/S23.
    pub const fn conway() -> Self {
        Self::new(
            DEFAULT_UNDER_POPULATION,
            DEFAULT_OVER_POPULATION,
            DEFAULT_REPRODUCTION,
        )
    }

    pub fn with_reproduction(mut self, reproduction: u8) -> Self {
        self.reproduction = reproduction;
        self
    }

    /// Check every threshold lies in `0..=8`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("under-population", self.under_population),
            ("over-population", self.over_population),
            ("reproduction", self.reproduction),
        ] {
            if value > MAX_NEIGHBORS {
                return Err(ConfigIssue::ThresholdOutOfRange { name, value }.into());
            }
        }
        Ok(())
    }

    /// Next state of a cell given its current state and live neighbor count.
    #[inline(always)]
    pub fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        if alive {
            live_neighbors >= self.under_population && live_neighbors <= self.over_population
        } else {
            live_neighbors == self.reproduction
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::conway()
    }
}
