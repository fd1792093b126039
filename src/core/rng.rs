//! Seedable random source threaded through game setup and agents.
//!
//! Nothing in the engine touches a global RNG. The deck shuffle and the
//! agents each draw from their own stream derived from one game seed, so a
//! seed fully determines the deal, and agent randomness never perturbs it.
//!
//! ```
//! use jaipur_engine::core::GameRng;
//!
//! let mut deal = GameRng::new(7).for_context("deal");
//! let mut again = GameRng::new(7).for_context("deal");
//! let mut a: Vec<u32> = (0..20).collect();
//! let mut b = a.clone();
//! deal.shuffle(&mut a);
//! again.shuffle(&mut b);
//!
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for a named purpose ("deal", "agents", ...).
    ///
    /// The same seed and context always yield the same stream.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform random permutation in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Pick a random element.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
