//! RNG module - deterministic random food placement
//!
//! A simple LCG keeps the core free of external dependencies and makes whole
//! games reproducible from a seed, which the tests rely on.

use tui_snake_types::{Point, GRID_COUNT};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniformly random cell anywhere on the grid.
    pub fn next_point(&mut self) -> Point {
        let x = self.next_range(GRID_COUNT as u32) as i8;
        let y = self.next_range(GRID_COUNT as u32) as i8;
        Point::new(x, y)
    }

    /// Current internal state (for restarting a game with the same sequence).
    pub fn seed(&self) -> u32 {
        self.state
    }
}
