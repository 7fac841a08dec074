//! High score leaderboard
//!
//! The core only tracks a single monotone best score; hosts that want a
//! leaderboard keep one of these and feed it `RunEnded` events. Storage is the
//! host's job: entries round-trip through JSON for whatever persistence layer
//! it has.

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Pipes cleared
    pub score: u32,
    /// Ticks survived
    pub ticks: u64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Top-N leaderboard, sorted descending by score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        // Below capacity everything qualifies; at capacity the score must
        // beat the current lowest entry
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_none_or(|e| score > e.score)
    }

    /// Add a score if it qualifies. Returns the rank achieved (1-indexed).
    pub fn add_score(&mut self, score: u32, ticks: u64, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let entry = HighScoreEntry {
            score,
            ticks,
            timestamp,
        };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Top score, if any
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize for the host's storage collaborator
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{\"entries\":[]}".to_string())
    }

    /// Parse a stored payload; a corrupt payload yields a fresh leaderboard
    /// instead of an error (storage failures never reach the core).
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("discarding corrupt high score payload: {e}");
            Self::new()
        })
    }
}
