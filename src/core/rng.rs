//! Deterministic random number generation for secret selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same secret for the same bounds
//! - **Uniform**: Every interior integer of the configured range is equally likely
//!
//! The engine draws randomness exactly once per round, when the secret is
//! chosen. Rounds started with [`RoundRng::new`] and the same seed are fully
//! reproducible; [`RoundRng::from_entropy`] is for normal play.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to pick a round's secret number.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RoundRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    ///
    /// Callers that want to replay a round record this and pass it back
    /// to a seeded start later.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given half-open range.
    pub fn gen_range(&mut self, range: std::ops::Range<i64>) -> i64 {
        self.inner.gen_range(range)
    }
}
