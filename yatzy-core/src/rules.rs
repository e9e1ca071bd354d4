//! Scoring rule configuration.
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::ScoreError;

/// Tunable parts of the sheet. Missing JSON fields fall back to the
/// Scandinavian defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Upper-section sum that earns the bonus.
    #[serde(default = "ScoringRules::default_bonus_threshold")]
    pub bonus_threshold: u16,
    #[serde(default = "ScoringRules::default_bonus_points")]
    pub bonus_points: u16,
    /// Reject entries above [`Category::max_score`].
    #[serde(default = "ScoringRules::default_enforce_max_scores")]
    pub enforce_max_scores: bool,
}

impl ScoringRules {
    const fn default_bonus_threshold() -> u16 {
        63
    }

    const fn default_bonus_points() -> u16 {
        50
    }

    const fn default_enforce_max_scores() -> bool {
        true
    }

    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            bonus_threshold: Self::default_bonus_threshold(),
            bonus_points: Self::default_bonus_points(),
            enforce_max_scores: Self::default_enforce_max_scores(),
        }
    }

    /// Parse rules from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has fields of the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bonus earned for an upper-section sum.
    #[must_use]
    pub const fn bonus_for(&self, upper_total: u32) -> u32 {
        if upper_total >= self.bonus_threshold as u32 {
            self.bonus_points as u32
        } else {
            0
        }
    }

    /// Check a stored value against the category maximum.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidInput`] when max enforcement is on and the
    /// value exceeds what five dice can score in `category`.
    pub fn check_value(&self, category: Category, value: u16) -> Result<u16, ScoreError> {
        if self.enforce_max_scores && value > category.max_score() {
            return Err(ScoreError::invalid_input(
                value.to_string(),
                "above category maximum",
            ));
        }
        Ok(value)
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::default_config()
    }
}
