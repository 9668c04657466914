//! Random number generation
//!
//! Spell code never touches a concrete generator. It rolls through the
//! [`DiceRng`] trait so tests can swap in a [`FixedRng`] and pin every draw.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform integers used by every roll in the engine.
pub trait DiceRng {
    /// Uniform integer in `min..=max`. Returns `min` when `max < min`.
    fn uniform(&mut self, min: i32, max: i32) -> i32;

    /// Returns `0..n`, or 0 when `n <= 0`.
    fn randint0(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.uniform(0, n - 1)
    }

    /// Returns `1..=n`, or 0 when `n <= 0`.
    fn randint1(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.uniform(1, n)
    }

    /// Sum of `count` rolls of `1..=sides`.
    fn damroll(&mut self, count: i32, sides: i32) -> i32 {
        (0..count.max(0)).map(|_| self.randint1(sides)).sum()
    }

    /// True with probability 1/n.
    fn one_in(&mut self, n: i32) -> bool {
        self.randint0(n) == 0
    }
}

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Only the seed is serialized; a restored generator starts over from it.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
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
}

impl DiceRng for GameRng {
    fn uniform(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Deterministic generator that answers every draw the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedRng {
    /// Always the low end of the requested range.
    Min,
    /// Always the high end of the requested range.
    Max,
    /// Always this value, clamped into the requested range.
    Value(i32),
}

impl DiceRng for FixedRng {
    fn uniform(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        match *self {
            FixedRng::Min => min,
            FixedRng::Max => max,
            FixedRng::Value(v) => v.clamp(min, max),
        }
    }
}
