//! Guess results and the guess history record.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use super::range::ActiveRange;

/// Outcome of a single submitted guess.
///
/// `Invalid` means the guess was rejected (outside the current open range,
/// or the round was already over) and nothing changed; the caller should
/// re-prompt the same player. The other variants are valid guesses that
/// either narrowed the range or ended the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessResult {
    /// Guess rejected; range, turn, and outcome are unchanged.
    Invalid,
    /// Guess was below the secret; carries the narrowed range.
    TooLow(ActiveRange),
    /// Guess was above the secret; carries the narrowed range.
    TooHigh(ActiveRange),
    /// Guess matched the secret; the round is over.
    Win(PlayerId),
}

impl GuessResult {
    /// Whether the guess was accepted (anything but `Invalid`).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, GuessResult::Invalid)
    }

    /// Whether the guess ended the round.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, GuessResult::Win(_))
    }

    /// The narrowed range, for `TooLow` and `TooHigh` results.
    #[must_use]
    pub const fn narrowed_range(self) -> Option<ActiveRange> {
        match self {
            GuessResult::TooLow(range) | GuessResult::TooHigh(range) => Some(range),
            _ => None,
        }
    }
}

/// One accepted guess in a round's history.
///
/// Rejected guesses are not recorded: they change nothing, so replaying
/// the history through a fresh round reproduces the final state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// Who guessed.
    pub player: PlayerId,
    /// The guessed value.
    pub guess: i64,
    /// What the guess did to the round.
    pub result: GuessResult,
    /// 0-based position in the round's sequence of accepted guesses.
    pub sequence: u32,
}
