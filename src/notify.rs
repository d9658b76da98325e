//! Notification seam between the engine and a presentation layer.
//!
//! The engine itself performs no I/O. A presenter (terminal UI, web
//! front end, test recorder) implements `RoundObserver` and passes it to
//! [`Round::submit_guess_observed`](crate::round::Round::submit_guess_observed)
//! to be told what each guess did. Every method has a no-op default, so
//! presenters implement only the events they render.

use crate::core::PlayerId;
use crate::round::ActiveRange;

/// Receives the outcome events of a round.
///
/// ## Implementation Notes
///
/// - Callbacks fire after the engine state has already changed; querying
///   the round from inside a callback is not possible (the round is
///   mutably borrowed), so events carry everything a renderer needs.
/// - `turn_advanced` fires after `range_narrowed`, never after a win or
///   a rejection.
pub trait RoundObserver {
    /// A guess was rejected; `player` should be re-prompted.
    fn guess_rejected(&mut self, player: PlayerId, guess: i64) {
        let _ = (player, guess);
    }

    /// A valid guess narrowed the range to `range`.
    fn range_narrowed(&mut self, player: PlayerId, guess: i64, range: ActiveRange) {
        let _ = (player, guess, range);
    }

    /// The turn passed to `next`.
    fn turn_advanced(&mut self, next: PlayerId) {
        let _ = next;
    }

    /// `player`'s guess matched `secret`; the round is over.
    ///
    /// Whether this player is the winner or the loser is the presenter's
    /// call; the engine only reports who matched.
    fn round_won(&mut self, player: PlayerId, secret: i64) {
        let _ = (player, secret);
    }
}
