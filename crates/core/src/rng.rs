//! RNG module - uniform random piece selection
//!
//! Every spawn draws a kind independently and uniformly from the seven
//! catalog entries, so immediate repeats are possible (no bag).
//!
//! The generator is a small seedable LCG, which keeps games reproducible in tests.

use crate::types::PieceKind;

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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }
}

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: SimpleRng,
    seed: u32,
}

impl PieceRng {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        PieceKind::from_index(self.rng.next_range(PieceKind::ALL.len() as u32))
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_draw_covers_every_kind() {
        let mut pieces = PieceRng::new(1);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            counts[(pieces.draw().color() - 1) as usize] += 1;
        }
        // Uniform: each kind lands near 1000.
        for (i, &c) in counts.iter().enumerate() {
            assert!((700..1300).contains(&c), "kind {} drawn {} times", i, c);
        }
    }

    #[test]
    fn test_draw_allows_immediate_repeats() {
        let mut pieces = PieceRng::new(99);
        let mut prev = pieces.draw();
        let mut repeated = false;
        for _ in 0..200 {
            let next = pieces.draw();
            if next == prev {
                repeated = true;
                break;
            }
            prev = next;
        }
        assert!(repeated);
    }
}
