//! Top-five high-score table
//!
//! Kept separate from the save slots: the table records final scores after a
//! session ends and persists through the same storage capability. Display is
//! the host's concern.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::storage::SaveStorage;

/// Number of scores retained
pub const HIGH_SCORE_SLOTS: usize = 5;

/// Descending list of the best final scores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    scores: Vec<u32>,
}

impl HighScores {
    /// Insert a final score, keeping the best `HIGH_SCORE_SLOTS` in
    /// descending order. Returns whether the score made the table.
    pub fn record(&mut self, score: u32) -> bool {
        self.scores.push(score);
        self.scores.sort_unstable_by(|a, b| b.cmp(a));
        self.scores.truncate(HIGH_SCORE_SLOTS);
        self.scores.contains(&score)
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn best(&self) -> Option<u32> {
        self.scores.first().copied()
    }
}

/// Load the table; missing or malformed data yields an empty table
pub fn load_high_scores(storage: &dyn SaveStorage) -> HighScores {
    match storage.read() {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => HighScores::default(),
    }
}

/// Persist the table as JSON
pub fn store_high_scores(
    storage: &dyn SaveStorage,
    scores: &HighScores,
) -> Result<()> {
    let json = serde_json::to_string(scores)?;
    storage.write(&json)
}
