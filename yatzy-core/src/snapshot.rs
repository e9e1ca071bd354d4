//! Serializable sheet contents.
//!
//! A snapshot lists players in seating order, each with a map from category
//! key to a score or `null`. Snapshots may carry derived keys written by other
//! tools; the store ignores those and recomputes its own totals on load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whole-session sheet contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<PlayerSnapshot>,
}

/// One player's raw scores keyed by category key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    #[serde(default)]
    pub scores: BTreeMap<String, Option<i64>>,
}

impl Snapshot {
    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the snapshot layout.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|player| player.name == name)
    }
}

impl PlayerSnapshot {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: BTreeMap::new(),
        }
    }

    /// Builder-style helper for assembling fixtures and imports.
    #[must_use]
    pub fn with_score(mut self, key: &str, value: Option<i64>) -> Self {
        self.scores.insert(key.to_string(), value);
        self
    }
}
