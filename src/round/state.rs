//! Round state and the guess state machine.
//!
//! ## Round
//!
//! One `Round` value owns everything about a play-through:
//! - The configuration it was started with
//! - The secret number (never exposed while the round is in progress)
//! - The active open range, which narrows monotonically
//! - The turn rotation and per-player guess tallies
//! - The history of accepted guesses
//!
//! Starting a new round means constructing a new `Round`; there is no
//! process-wide game object and no cross-round residue.
//!
//! ## State machine
//!
//! `InProgress` self-loops on non-matching valid guesses and on rejected
//! guesses (a no-op), and transitions to `Won` only on a guess that
//! matches the secret. A won round rejects all further guesses.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ConfigError, PlayerId, PlayerMap, RoundConfig, RoundRng};
use crate::notify::RoundObserver;

use super::guess::{GuessRecord, GuessResult};
use super::outcome::RoundOutcome;
use super::range::ActiveRange;

/// Inline history capacity. Binary search ends a round in O(log range)
/// guesses, so most histories never spill to the heap.
const HISTORY_INLINE: usize = 16;

/// Complete state of one round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    config: RoundConfig,
    secret: i64,
    range: ActiveRange,
    turn: PlayerId,
    outcome: RoundOutcome,
    history: SmallVec<[GuessRecord; HISTORY_INLINE]>,
    guess_counts: PlayerMap<u32>,
}

impl Round {
    /// Start a round with a secret drawn from OS entropy.
    ///
    /// The secret is chosen uniformly from the integers strictly between
    /// the configured bounds.
    pub fn start(config: RoundConfig) -> Result<Self, ConfigError> {
        Self::start_with_rng(config, RoundRng::from_entropy())
    }

    /// Start a round with a deterministic secret derived from `seed`.
    ///
    /// The same config and seed always produce the same round, which is
    /// how callers replay a round later.
    pub fn start_seeded(config: RoundConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::start_with_rng(config, RoundRng::new(seed))
    }

    /// Start a round with a caller-chosen secret.
    ///
    /// For replays and scripted scenarios. The secret must be strictly
    /// interior to the configured bounds.
    pub fn with_secret(config: RoundConfig, secret: i64) -> Result<Self, ConfigError> {
        config.validate()?;

        let range = ActiveRange::new(config.lower_bound, config.upper_bound);
        if !range.contains(secret) {
            return Err(ConfigError::SecretOutOfRange {
                secret,
                lower: config.lower_bound,
                upper: config.upper_bound,
            });
        }

        Ok(Self::from_parts(config, secret))
    }

    fn start_with_rng(config: RoundConfig, mut rng: RoundRng) -> Result<Self, ConfigError> {
        config.validate()?;

        // Endpoints excluded: the secret is drawn from (lower, upper).
        let secret = rng.gen_range(config.lower_bound + 1..config.upper_bound);
        Ok(Self::from_parts(config, secret))
    }

    fn from_parts(config: RoundConfig, secret: i64) -> Self {
        Self {
            config,
            secret,
            range: ActiveRange::new(config.lower_bound, config.upper_bound),
            turn: PlayerId::new(0),
            outcome: RoundOutcome::InProgress,
            history: SmallVec::new(),
            guess_counts: PlayerMap::with_value(config.player_count, 0),
        }
    }

    // === Guess submission ===

    /// Submit the current player's guess.
    ///
    /// A guess is valid only if it lies strictly inside the *current*
    /// range, not the original bounds. Invalid guesses (and any guess
    /// after the round is won) return [`GuessResult::Invalid`] and leave
    /// every piece of state untouched.
    ///
    /// Valid guesses, in priority order:
    /// 1. Matches the secret: the round becomes `Won`, range and turn
    ///    are frozen.
    /// 2. Below the secret: the guess becomes the new minimum.
    /// 3. Above the secret: the guess becomes the new maximum.
    ///
    /// After a non-winning valid guess the turn advances round-robin.
    pub fn submit_guess(&mut self, guess: i64) -> GuessResult {
        if self.outcome.is_over() || !self.range.contains(guess) {
            return GuessResult::Invalid;
        }

        let player = self.turn;
        let result = match guess.cmp(&self.secret) {
            std::cmp::Ordering::Equal => {
                self.outcome = RoundOutcome::Won {
                    player,
                    secret: self.secret,
                };
                GuessResult::Win(player)
            }
            std::cmp::Ordering::Less => {
                self.range = self.range.raised_to(guess);
                GuessResult::TooLow(self.range)
            }
            std::cmp::Ordering::Greater => {
                self.range = self.range.lowered_to(guess);
                GuessResult::TooHigh(self.range)
            }
        };

        // The secret starts interior and narrowing stops at the guess,
        // so it must still be interior unless this guess won.
        debug_assert!(self.outcome.is_over() || self.range.contains(self.secret));

        self.record(player, guess, result);
        if !result.is_win() {
            self.turn = self.turn.next(self.config.player_count);
        }

        result
    }

    /// Submit a guess and report what happened to an observer.
    ///
    /// Same transition as [`Round::submit_guess`]; the observer receives
    /// the matching notification (and a turn notification after a
    /// non-winning valid guess) before the result is returned.
    pub fn submit_guess_observed<O>(&mut self, guess: i64, observer: &mut O) -> GuessResult
    where
        O: RoundObserver + ?Sized,
    {
        let player = self.turn;
        let result = self.submit_guess(guess);

        match result {
            GuessResult::Invalid => observer.guess_rejected(player, guess),
            GuessResult::TooLow(range) | GuessResult::TooHigh(range) => {
                observer.range_narrowed(player, guess, range);
                observer.turn_advanced(self.turn);
            }
            GuessResult::Win(winner) => observer.round_won(winner, self.secret),
        }

        result
    }

    fn record(&mut self, player: PlayerId, guess: i64, result: GuessResult) {
        let sequence = self.history.len() as u32;
        self.history.push(GuessRecord {
            player,
            guess,
            result,
            sequence,
        });
        self.guess_counts[player] += 1;
    }

    // === Queries ===

    /// The configuration this round was started with.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The player whose guess is currently expected.
    ///
    /// Frozen on the matching player once the round is won.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn
    }

    /// The current open range the secret is known to lie in.
    #[must_use]
    pub fn current_range(&self) -> ActiveRange {
        self.range
    }

    /// Whether the round is in progress or won.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// The secret, revealed only once the round is over.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<i64> {
        self.outcome.secret()
    }

    /// All accepted guesses, in submission order.
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of accepted guesses so far.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.history.len() as u32
    }

    /// Number of accepted guesses a player has made.
    #[must_use]
    pub fn guess_count(&self, player: PlayerId) -> u32 {
        self.guess_counts[player]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_round(secret: i64) -> Round {
        Round::with_secret(RoundConfig::new(0, 100), secret).unwrap()
    }

    #[test]
    fn test_start_initializes_state() {
        let round = Round::start_seeded(RoundConfig::new(0, 100), 42).unwrap();

        assert_eq!(round.current_player(), PlayerId::new(0));
        assert_eq!(round.current_range(), ActiveRange::new(0, 100));
        assert_eq!(round.outcome(), RoundOutcome::InProgress);
        assert!(round.history().is_empty());
        assert_eq!(round.revealed_secret(), None);
    }

    #[test]
    fn test_start_seeded_is_deterministic() {
        let a = Round::start_seeded(RoundConfig::new(0, 100), 7).unwrap();
        let b = Round::start_seeded(RoundConfig::new(0, 100), 7).unwrap();
        assert_eq!(a.secret, b.secret);
    }

    #[test]
    fn test_secret_is_interior() {
        for seed in 0..200 {
            let round = Round::start_seeded(RoundConfig::new(10, 13), seed).unwrap();
            assert!((11..=12).contains(&round.secret));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Round::start_seeded(RoundConfig::new(5, 6), 0).is_err());
        assert!(Round::start(RoundConfig::new(0, 100).with_player_count(1)).is_err());
    }

    #[test]
    fn test_with_secret_rejects_endpoints() {
        let config = RoundConfig::new(0, 100);

        assert!(Round::with_secret(config, 0).is_err());
        assert!(Round::with_secret(config, 100).is_err());
        assert!(Round::with_secret(config, -1).is_err());
        assert!(Round::with_secret(config, 1).is_ok());
        assert!(Round::with_secret(config, 99).is_ok());
    }

    #[test]
    fn test_too_high_narrows_max() {
        let mut round = fixed_round(42);

        let result = round.submit_guess(70);
        assert_eq!(result, GuessResult::TooHigh(ActiveRange::new(0, 70)));
        assert_eq!(round.current_range(), ActiveRange::new(0, 70));
        assert_eq!(round.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_too_low_narrows_min() {
        let mut round = fixed_round(42);

        let result = round.submit_guess(10);
        assert_eq!(result, GuessResult::TooLow(ActiveRange::new(10, 100)));
        assert_eq!(round.current_range(), ActiveRange::new(10, 100));
        assert_eq!(round.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_win_freezes_range_and_turn() {
        let mut round = fixed_round(42);
        round.submit_guess(50);

        let result = round.submit_guess(42);
        assert_eq!(result, GuessResult::Win(PlayerId::new(1)));
        assert_eq!(
            round.outcome(),
            RoundOutcome::Won {
                player: PlayerId::new(1),
                secret: 42,
            }
        );
        // Frozen: turn stays on the matching player, range on (0, 50)
        assert_eq!(round.current_player(), PlayerId::new(1));
        assert_eq!(round.current_range(), ActiveRange::new(0, 50));
        assert_eq!(round.revealed_secret(), Some(42));
    }

    #[test]
    fn test_guess_after_win_is_invalid() {
        let mut round = fixed_round(42);
        round.submit_guess(42);

        assert_eq!(round.submit_guess(30), GuessResult::Invalid);
        assert_eq!(round.turn_count(), 1);
        assert_eq!(round.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_out_of_range_guess_is_noop() {
        let mut round = fixed_round(42);
        round.submit_guess(70);

        let range_before = round.current_range();
        let player_before = round.current_player();

        // Valid against the original bounds, not against (0, 70)
        for _ in 0..2 {
            assert_eq!(round.submit_guess(85), GuessResult::Invalid);
            assert_eq!(round.current_range(), range_before);
            assert_eq!(round.current_player(), player_before);
        }
    }

    #[test]
    fn test_endpoint_guess_is_invalid() {
        let mut round = fixed_round(42);

        assert_eq!(round.submit_guess(0), GuessResult::Invalid);
        assert_eq!(round.submit_guess(100), GuessResult::Invalid);

        round.submit_guess(20);
        assert_eq!(round.submit_guess(20), GuessResult::Invalid);
    }

    #[test]
    fn test_history_and_counts() {
        let mut round = Round::with_secret(
            RoundConfig::new(0, 100).with_player_count(3),
            42,
        )
        .unwrap();

        round.submit_guess(50); // player 0, too high
        round.submit_guess(200); // rejected, not recorded
        round.submit_guess(10); // player 1, too low
        round.submit_guess(42); // player 2, win

        let history = round.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].player, PlayerId::new(0));
        assert_eq!(history[0].guess, 50);
        assert_eq!(history[1].player, PlayerId::new(1));
        assert_eq!(history[2].result, GuessResult::Win(PlayerId::new(2)));
        assert_eq!(history[2].sequence, 2);

        assert_eq!(round.guess_count(PlayerId::new(0)), 1);
        assert_eq!(round.guess_count(PlayerId::new(1)), 1);
        assert_eq!(round.guess_count(PlayerId::new(2)), 1);
        assert_eq!(round.turn_count(), 3);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut round = fixed_round(42);
        round.submit_guess(50);
        round.submit_guess(10);

        let json = serde_json::to_string(&round).unwrap();
        let restored: Round = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.current_range(), round.current_range());
        assert_eq!(restored.current_player(), round.current_player());
        assert_eq!(restored.history(), round.history());

        // The restored round continues identically
        let mut restored = restored;
        assert_eq!(restored.submit_guess(42), GuessResult::Win(PlayerId::new(0)));
    }
}
