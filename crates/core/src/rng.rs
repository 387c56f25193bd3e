//! RNG module - seeded sine generator for board letters
//!
//! Shared boards are identified by nothing more than their seed, so every
//! client must derive the same letters from it. The generator therefore keeps
//! the exact arithmetic of the browser version: the fractional part of
//! `sin(seed) * 10000`, with the seed advancing by one per draw.

use crate::types::ALPHABET;

/// Deterministic sine-based generator
///
/// Not a good source of randomness; its only job is reproducibility.
#[derive(Debug, Clone)]
pub struct SineRng {
    state: i64,
}

impl SineRng {
    /// Create a new generator starting at `seed`
    pub fn new(seed: i64) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        let x = (self.state as f64).sin() * 10000.0;
        self.state = self.state.wrapping_add(1);
        x - x.floor()
    }

    /// Next index in `[0, max)`
    pub fn next_index(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        // Rounding can push `v * max` up to `max` when v is within an ulp of 1.
        ((self.next_f64() * max as f64).floor() as usize).min(max - 1)
    }

    /// Next uppercase letter A-Z
    pub fn next_letter(&mut self) -> char {
        ALPHABET[self.next_index(ALPHABET.len())] as char
    }

    /// Seed the next draw will use
    pub fn state(&self) -> i64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SineRng::new(12345);
        let mut rng2 = SineRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_f64().to_bits(), rng2.next_f64().to_bits());
        }
    }

    #[test]
    fn test_rng_values_in_unit_range() {
        let mut rng = SineRng::new(-500);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_rng_advances_one_per_draw() {
        let mut rng = SineRng::new(7);
        rng.next_letter();
        rng.next_letter();
        assert_eq!(rng.state(), 9);
    }

    #[test]
    fn test_first_letters_for_seed_42() {
        let mut rng = SineRng::new(42);
        let letters: String = (0..5).map(|_| rng.next_letter()).collect();
        assert_eq!(letters, "UGAAW");
    }

    #[test]
    fn test_next_index_zero_max() {
        let mut rng = SineRng::new(1);
        assert_eq!(rng.next_index(0), 0);
    }
}
