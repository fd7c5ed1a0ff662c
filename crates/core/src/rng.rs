//! RNG module - deterministic randomness for tile spawning
//!
//! A small LCG keeps every game reproducible from its seed, which is what the
//! tests and benches rely on. The terminal binary seeds it from the clock.

use crate::types::{Tile, SPAWN_FOUR_IN_TEN};

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
    ///
    /// Uses the high bits (multiply-shift) since the low bits of an LCG have
    /// short periods. `max` must be nonzero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Value for a freshly spawned tile: 2 nine times in ten, otherwise 4
    pub fn spawn_value(&mut self) -> Tile {
        if self.next_range(10) < SPAWN_FOUR_IN_TEN {
            4
        } else {
            2
        }
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
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

        // Same seed should produce same sequence
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
    fn test_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..20 {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_next_range_hits_every_bucket() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 16];
        for _ in 0..1000 {
            seen[rng.next_range(16) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_spawn_value_is_mostly_twos() {
        let mut rng = SimpleRng::new(2024);
        let mut twos = 0;
        let mut fours = 0;
        for _ in 0..10_000 {
            match rng.spawn_value() {
                2 => twos += 1,
                4 => fours += 1,
                other => panic!("unexpected spawn value {other}"),
            }
        }
        // 90/10 split, with generous slack.
        assert!(twos > 8_500, "twos = {twos}");
        assert!(fours > 500, "fours = {fours}");
    }
}
