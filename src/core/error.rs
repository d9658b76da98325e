//! Error types for round configuration.
//!
//! Invalid guesses are not errors: they come back as
//! [`GuessResult::Invalid`](crate::round::GuessResult::Invalid) with the
//! round state untouched, and the caller re-prompts. `ConfigError` covers
//! the only fatal case, a round that cannot start.

use thiserror::Error;

/// Why a round could not be started.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No integer lies strictly between the bounds, so no secret exists.
    #[error("no integer lies strictly between {lower} and {upper}")]
    DegenerateRange {
        /// Configured lower bound.
        lower: i64,
        /// Configured upper bound.
        upper: i64,
    },

    /// Turn rotation needs at least two players.
    #[error("a round needs at least 2 players, got {0}")]
    TooFewPlayers(usize),

    /// Player IDs are u8-backed, capping a round at 255 players.
    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    /// A forced secret must be strictly interior to the bounds.
    #[error("secret {secret} is not strictly inside ({lower}, {upper})")]
    SecretOutOfRange {
        /// The rejected secret.
        secret: i64,
        /// Configured lower bound.
        lower: i64,
        /// Configured upper bound.
        upper: i64,
    },
}
