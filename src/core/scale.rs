//! The bounded severity scale shared by every rating prompt.

use serde::{Deserialize, Serialize};

/// Lowest severity a rating may take by default.
pub const DEFAULT_MIN_RATING: u8 = 0;
/// Highest severity a rating may take by default.
pub const DEFAULT_MAX_RATING: u8 = 5;

/// Inclusive range every severity score must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingScale {
    /// Inclusive lower bound.
    pub min: u8,
    /// Inclusive upper bound.
    pub max: u8,
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_RATING,
            max: DEFAULT_MAX_RATING,
        }
    }
}

impl RatingScale {
    /// Create a scale with the given bounds.
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the scale.
    #[must_use]
    pub const fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether the bounds describe a non-empty range.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Human-readable range hint appended to prompts, e.g. `(0-5)`.
    #[must_use]
    pub fn hint(&self) -> String {
        format!("({}-{})", self.min, self.max)
    }
}
