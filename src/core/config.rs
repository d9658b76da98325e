//! Round configuration.
//!
//! A round is configured with the guessing bounds and the number of
//! players. The secret is always strictly interior to the bounds, so a
//! configuration is only valid when at least one integer lies strictly
//! between them.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Configuration for a single round.
///
/// ## Invariants (checked by [`RoundConfig::validate`])
///
/// - `upper_bound >= lower_bound + 2`, so at least one interior integer exists
/// - `2 <= player_count <= 255`
///
/// ## Example
///
/// ```
/// use guess_duel::core::RoundConfig;
///
/// let config = RoundConfig::new(0, 100).with_player_count(4);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.interior_count(), 99);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Lower bound of the guessing range. Never a valid secret or guess.
    pub lower_bound: i64,

    /// Upper bound of the guessing range. Never a valid secret or guess.
    pub upper_bound: i64,

    /// Number of players in the turn rotation.
    pub player_count: usize,
}

impl Default for RoundConfig {
    /// Bounds (0, 100) with 2 players.
    fn default() -> Self {
        Self {
            lower_bound: 0,
            upper_bound: 100,
            player_count: 2,
        }
    }
}

impl RoundConfig {
    /// Create a configuration with the given bounds and 2 players.
    #[must_use]
    pub const fn new(lower_bound: i64, upper_bound: i64) -> Self {
        Self {
            lower_bound,
            upper_bound,
            player_count: 2,
        }
    }

    /// Set the player count.
    #[must_use]
    pub const fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Number of integers strictly between the bounds.
    ///
    /// Computed in i128 so extreme i64 bounds cannot overflow.
    #[must_use]
    pub fn interior_count(&self) -> u64 {
        let width = self.upper_bound as i128 - self.lower_bound as i128;
        if width <= 1 {
            0
        } else {
            (width - 1) as u64
        }
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interior_count() == 0 {
            return Err(ConfigError::DegenerateRange {
                lower: self.lower_bound,
                upper: self.upper_bound,
            });
        }
        if self.player_count < 2 {
            return Err(ConfigError::TooFewPlayers(self.player_count));
        }
        if self.player_count > 255 {
            return Err(ConfigError::TooManyPlayers(self.player_count));
        }
        Ok(())
    }
}
