//! Injected randomness.
//!
//! The generator never reaches for a global random source. Everything it draws
//! goes through [`RandomSource`], which is implemented for every [`rand::Rng`],
//! so tests can hand in a seeded `SmallRng` and the app can hand in one seeded
//! from entropy.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Uniform samples used by the scene generator.
///
/// The ranged draws never panic on empty or inverted ranges, which `rand`'s
/// `gen_range` would; they return the lower bound instead.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// A fresh 64 bit seed.
    fn seed(&mut self) -> u64;

    /// Uniform float in `[lo, hi)`.
    fn range(&mut self, lo: f32, hi: f32) -> f32;

    /// Uniform integer in `[lo, hi)`.
    fn range_usize(&mut self, lo: usize, hi: usize) -> usize;

    /// One element of `items`, `None` if it is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;

    /// Uniform angle in `[0, 2π)`.
    fn angle(&mut self) -> f32 {
        self.range(0.0, TAU)
    }
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f32 {
        self.r#gen::<f32>()
    }

    fn seed(&mut self) -> u64 {
        self.next_u64()
    }

    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        // also rejects NaN bounds
        if !(lo < hi) {
            return lo;
        }
        self.gen_range(lo..hi)
    }

    fn range_usize(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..hi)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(self)
    }
}

/// The generator used inside a generation pass.
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// A generator seeded from system entropy, used for every user triggered rebuild.
pub fn from_entropy() -> SmallRng {
    SmallRng::from_entropy()
}
