//! Deterministic random number generation for dealing boards.
//!
//! The same seed always deals the same board and the same agent words,
//! which makes a game reproducible from the seed printed at startup.
//!
//! ```
//! use codenames::core::GameRng;
//!
//! let words: Vec<u32> = (0..100).collect();
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.sample(&words, 25), rng2.sample(&words, 25));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for board and agent sampling.
///
/// Uses ChaCha8 so that a seed reproduces across platforms.
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

    /// Create an RNG with a seed drawn from the OS.
    ///
    /// The chosen seed is available through [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample `amount` distinct elements without replacement.
    ///
    /// Elements are returned in draw order. If `amount` exceeds the slice
    /// length, every element is returned.
    pub fn sample<T: Clone>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        slice
            .choose_multiple(&mut self.inner, amount)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let items: Vec<u32> = (0..400).collect();
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(rng1.sample(&items, 25), rng2.sample(&items, 25));
        }
    }

    #[test]
    fn test_different_seeds() {
        let items: Vec<u32> = (0..400).collect();
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(rng1.sample(&items, 25), rng2.sample(&items, 25));
    }

    #[test]
    fn test_sample_is_without_replacement() {
        let items: Vec<u32> = (0..30).collect();
        let mut rng = GameRng::new(7);

        let mut drawn = rng.sample(&items, 25);
        assert_eq!(drawn.len(), 25);

        drawn.sort_unstable();
        drawn.dedup();
        assert_eq!(drawn.len(), 25);
        assert!(drawn.iter().all(|d| items.contains(d)));
    }

    #[test]
    fn test_sample_more_than_available() {
        let items = vec![1, 2, 3];
        let mut rng = GameRng::new(7);

        let mut drawn = rng.sample(&items, 10);
        drawn.sort_unstable();
        assert_eq!(drawn, vec![1, 2, 3]);
    }

    #[test]
    fn test_seed_is_recorded() {
        assert_eq!(GameRng::new(99).seed(), 99);

        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut rng = rng;
        let items: Vec<u32> = (0..50).collect();
        assert_eq!(rng.sample(&items, 5), replay.sample(&items, 5));
    }
}
