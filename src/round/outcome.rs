//! Terminal state of a round.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Whether a round is still being played or has ended.
///
/// The engine deliberately does not say whether the matching player
/// "won" or "lost" the round; house rules differ on whether hitting the
/// secret is good or bad, so the presenter applies its own label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Guesses are still being accepted.
    #[default]
    InProgress,
    /// A guess matched the secret; the round is frozen.
    Won {
        /// The player whose guess matched.
        player: PlayerId,
        /// The secret, now revealed.
        secret: i64,
    },
}

impl RoundOutcome {
    /// Whether the round has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }

    /// The player whose guess ended the round, if it has ended.
    #[must_use]
    pub const fn matching_player(self) -> Option<PlayerId> {
        match self {
            RoundOutcome::Won { player, .. } => Some(player),
            RoundOutcome::InProgress => None,
        }
    }

    /// The revealed secret, if the round has ended.
    #[must_use]
    pub const fn secret(self) -> Option<i64> {
        match self {
            RoundOutcome::Won { secret, .. } => Some(secret),
            RoundOutcome::InProgress => None,
        }
    }
}
