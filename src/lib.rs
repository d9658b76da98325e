//! # guess-duel
//!
//! A turn-based range-narrowing guessing game engine.
//!
//! A secret integer is chosen strictly inside a configured range. Players
//! take turns guessing; each valid non-matching guess replaces one end of
//! the active open interval, and the first guess to match the secret ends
//! the round.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: No I/O, no globals. A [`Round`] is an
//!    explicitly constructed value the caller owns; starting a new round
//!    means constructing a new value.
//!
//! 2. **N-Player First**: Turn rotation works for any 2-255 players.
//!    No convenience methods that assume 2 players.
//!
//! 3. **Deterministic when asked**: Entropy-seeded starts for play,
//!    seeded and fixed-secret starts for replays and tests.
//!
//! 4. **Presentation-agnostic**: The engine never labels the matching
//!    player winner or loser and never renders anything. Presenters
//!    implement [`RoundObserver`] to be told what each guess did.
//!
//! ## Example
//!
//! ```
//! use guess_duel::{GuessResult, PlayerId, Round, RoundConfig};
//!
//! let config = RoundConfig::new(0, 100).with_player_count(2);
//! let mut round = Round::with_secret(config, 42)?;
//!
//! assert!(matches!(round.submit_guess(50), GuessResult::TooHigh(_)));
//! assert!(matches!(round.submit_guess(10), GuessResult::TooLow(_)));
//! assert_eq!(round.submit_guess(42), GuessResult::Win(PlayerId::new(0)));
//! # Ok::<(), guess_duel::ConfigError>(())
//! ```
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration, errors
//! - `round`: The round state machine (range, guesses, outcome, state)
//! - `notify`: Observer trait for presentation layers

pub mod core;
pub mod notify;
pub mod round;

// Re-export commonly used types
pub use crate::core::{ConfigError, PlayerId, PlayerMap, RoundConfig, RoundRng};
pub use crate::notify::RoundObserver;
pub use crate::round::{ActiveRange, GuessRecord, GuessResult, Round, RoundOutcome};
