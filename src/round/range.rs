//! The active guessing range.
//!
//! An `ActiveRange` is an open interval `(min, max)`: both endpoints are
//! excluded. The secret always lies strictly inside it, and every
//! non-winning valid guess replaces one endpoint, so `min` only rises and
//! `max` only falls across a round.

use serde::{Deserialize, Serialize};

/// Open interval the secret is known to lie in.
///
/// ## Example
///
/// ```
/// use guess_duel::round::ActiveRange;
///
/// let range = ActiveRange::new(0, 100);
/// assert!(range.contains(50));
/// assert!(!range.contains(0));
/// assert!(!range.contains(100));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveRange {
    min: i64,
    max: i64,
}

impl ActiveRange {
    /// Create a new range with the given endpoints (both excluded).
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Lower endpoint, excluded from the range.
    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    /// Upper endpoint, excluded from the range.
    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }

    /// Whether `value` lies strictly between the endpoints.
    ///
    /// This is the validity test for guesses: a guess equal to either
    /// endpoint is rejected.
    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        self.min < value && value < self.max
    }

    /// Number of integers strictly between the endpoints.
    ///
    /// Computed in i128 so extreme i64 endpoints cannot overflow.
    #[must_use]
    pub fn interior_count(self) -> u64 {
        let width = self.max as i128 - self.min as i128;
        if width <= 1 {
            0
        } else {
            (width - 1) as u64
        }
    }

    /// The range after a too-low guess: the guess becomes the new minimum.
    #[must_use]
    pub fn raised_to(self, new_min: i64) -> Self {
        debug_assert!(self.contains(new_min), "new minimum must be interior");
        Self {
            min: new_min,
            max: self.max,
        }
    }

    /// The range after a too-high guess: the guess becomes the new maximum.
    #[must_use]
    pub fn lowered_to(self, new_max: i64) -> Self {
        debug_assert!(self.contains(new_max), "new maximum must be interior");
        Self {
            min: self.min,
            max: new_max,
        }
    }
}

impl std::fmt::Display for ActiveRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_strict() {
        let range = ActiveRange::new(10, 20);

        assert!(!range.contains(10));
        assert!(range.contains(11));
        assert!(range.contains(19));
        assert!(!range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_interior_count() {
        assert_eq!(ActiveRange::new(0, 100).interior_count(), 99);
        assert_eq!(ActiveRange::new(0, 2).interior_count(), 1);
        assert_eq!(ActiveRange::new(0, 1).interior_count(), 0);
        assert_eq!(ActiveRange::new(i64::MIN, i64::MAX).interior_count(), u64::MAX - 1);
    }

    #[test]
    fn test_narrowing() {
        let range = ActiveRange::new(0, 100);

        let raised = range.raised_to(30);
        assert_eq!(raised, ActiveRange::new(30, 100));

        let lowered = raised.lowered_to(60);
        assert_eq!(lowered, ActiveRange::new(30, 60));

        // Narrowing never touches the other endpoint
        assert_eq!(lowered.min(), 30);
        assert_eq!(lowered.max(), 60);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ActiveRange::new(-5, 42)), "(-5, 42)");
    }

    #[test]
    fn test_serialization() {
        let range = ActiveRange::new(3, 17);
        let json = serde_json::to_string(&range).unwrap();
        let deserialized: ActiveRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, deserialized);
    }
}
