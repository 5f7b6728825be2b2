//! RNG module - seedable source of initial cell states
//!
//! A small LCG is plenty for picking initial cells and keeps runs reproducible:
//! the same seed always produces the same starting grid.

/// Source of initial `alive` states, consumed once per cell at construction.
pub trait CellSeed {
    fn next_alive(&mut self) -> bool;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Fair coin flip.
    ///
    /// Low LCG bits have short periods (bit 0 simply alternates), so this
    /// reads the top bit.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl CellSeed for SimpleRng {
    fn next_alive(&mut self) -> bool {
        self.next_bool()
    }
}

/// Every cell starts dead.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDead;

impl CellSeed for AllDead {
    fn next_alive(&mut self) -> bool {
        false
    }
}
