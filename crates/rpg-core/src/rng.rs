//! Random number generation for combat
//!
//! Every probabilistic decision in the core goes through [`RandomSource`], so
//! a fight can be replayed from a seed ([`GameRng`]) or scripted draw by draw
//! in tests ([`ScriptedRng`]).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. Returns 0 if `len` is 0.
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }

    /// Returns true with probability `chance`
    fn chance(&mut self, chance: f64) -> bool {
        self.next_unit() < chance
    }
}

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.rn2(len as u32) as usize
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Fixed-sequence source for deterministic fights
///
/// Replays `draws` in order and wraps around at the end. An empty script
/// yields [`ScriptedRng::NEVER`], a draw no move probability can beat.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Largest value below 1.0
    pub const NEVER: f64 = 1.0 - f64::EPSILON;

    /// A draw that beats every non-zero probability
    pub const ALWAYS: f64 = 0.0;

    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// A source under which no special move ever triggers
    pub fn never() -> Self {
        Self::new(vec![Self::NEVER])
    }

    /// Number of draws handed out so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.cursor += 1;
            return Self::NEVER;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw.clamp(0.0, Self::NEVER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_unit_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let draw = rng.next_unit();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_unit(), rng2.next_unit());
        }
        assert_eq!(rng1.seed(), 42);
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.next_index(0), 0);
    }

    #[test]
    fn test_scripted_replays_and_wraps() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn test_scripted_empty_never_triggers() {
        let mut rng = ScriptedRng::default();
        assert!(!rng.chance(0.999));
        assert!(!ScriptedRng::never().chance(0.5));
    }

    #[test]
    fn test_scripted_index() {
        let mut rng = ScriptedRng::new(vec![0.0, 0.5, ScriptedRng::NEVER]);
        assert_eq!(rng.next_index(4), 0);
        assert_eq!(rng.next_index(4), 2);
        assert_eq!(rng.next_index(4), 3);
    }
}
