//! Deterministic seeded random number generation.
//!
//! The engines themselves are fully deterministic; randomness only enters
//! through opt-in tie-breaking in the reflex decision. Same seed, same
//! sequence, so seeded runs stay reproducible and testable.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for reproducible tie-breaking.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Choose a random element from a slice.
    ///
    /// Returns `None` on an empty slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
