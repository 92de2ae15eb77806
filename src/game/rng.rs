//! Seeded random number generation for scenes.
//!
//! The scene host owns one root generator and forks an independent stream
//! for every scene it builds, so a single seed replays a whole session.
//!
//! ```
//! use scene_switcher_engine::game::SceneRng;
//!
//! let mut root = SceneRng::new(42);
//! let mut cards = root.fork();
//! let mut text = root.fork();
//!
//! // Forks draw from different streams
//! let a: Vec<u32> = (0..4).map(|_| cards.tint()).collect();
//! let b: Vec<u32> = (0..4).map(|_| text.tint()).collect();
//! assert_ne!(a, b);
//! ```

use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment used to spread fork seeds apart
const FORK_SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG with forking, one stream per scene.
#[derive(Clone, Debug)]
pub struct SceneRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl SceneRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen_range(0..u64::MAX);
        Self::new(seed)
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(FORK_SEED_STEP));
        Self::new(fork_seed)
    }

    /// Uniform float in `range` (half-open).
    pub fn range_f32(&mut self, range: Range<f32>) -> f32 {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Random 24-bit `0xRRGGBB` color.
    pub fn tint(&mut self) -> u32 {
        self.inner.gen_range(0..=0x00ff_ffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = SceneRng::new(42);
        let mut rng2 = SceneRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.range_f32(0.0..1.0), rng2.range_f32(0.0..1.0));
        }
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = SceneRng::new(42);
        let mut rng2 = SceneRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();
        assert_eq!(forked1.seed(), forked2.seed());

        // Second fork differs from the first
        assert_ne!(rng1.fork().seed(), forked1.seed());
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = SceneRng::new(7);
        for _ in 0..1000 {
            let v = rng.range_f32(50.0..100.0);
            assert!((50.0..100.0).contains(&v));
        }
    }

    #[test]
    fn test_tint_is_24_bit() {
        let mut rng = SceneRng::new(7);
        for _ in 0..1000 {
            assert!(rng.tint() <= 0xffffff);
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = SceneRng::new(42);
        let items = ["a", "b", "c"];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some_and(|c| items.contains(c)));

        let empty: [&str; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SceneRng::new(3);
        assert!((0..100).all(|_| rng.chance(1.0)));
        assert!((0..100).all(|_| !rng.chance(0.0)));
    }
}
