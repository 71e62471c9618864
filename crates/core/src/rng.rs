//! Injectable randomness for shape generation
//!
//! The engine draws shape kind, angle, and color uniformly from the fixed
//! enumerations through the `RandomSource` trait, so tests can supply a
//! scripted sequence instead of an ambient generator. The default source is
//! a small seeded LCG.

/// Uniform random draws over `[0, max)`
pub trait RandomSource {
    fn next_range(&mut self, max: u32) -> u32;
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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
