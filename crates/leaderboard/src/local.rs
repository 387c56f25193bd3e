//! Local high scores and player name kept in client storage

use std::sync::Arc;

use lexplosion_dictionary::{KeyValueStore, StorageError};

use crate::entry::{parse_entries, rank, LeaderboardEntry};

/// Storage key for the local high-score list
pub const HIGH_SCORES_KEY: &str = "highScores";

/// Storage key for the player name
pub const PLAYER_NAME_KEY: &str = "playerName";

/// Entries kept locally
pub const LOCAL_CAP: usize = 5;

/// Per-device top scores and player profile
#[derive(Clone)]
pub struct LocalHighScores {
    store: Arc<dyn KeyValueStore>,
    cap: usize,
}

impl LocalHighScores {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            cap: LOCAL_CAP,
        }
    }

    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// Stored entries, best first
    pub fn list(&self) -> Vec<LeaderboardEntry> {
        let mut entries = self
            .store
            .get(HIGH_SCORES_KEY)
            .map(|text| parse_entries(&text))
            .unwrap_or_default();
        rank(&mut entries, Some(self.cap));
        entries
    }

    /// Record a finished game
    pub fn record(&self, entry: LeaderboardEntry) -> Result<(), StorageError> {
        let mut entries = self.list();
        entries.push(entry);
        rank(&mut entries, Some(self.cap));
        let text = serde_json::to_string(&entries)?;
        self.store.set(HIGH_SCORES_KEY, &text)
    }

    /// Saved player name, if any
    pub fn player_name(&self) -> Option<String> {
        self.store
            .get(PLAYER_NAME_KEY)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
    }

    pub fn set_player_name(&self, name: &str) -> Result<(), StorageError> {
        self.store.set(PLAYER_NAME_KEY, name.trim())
    }

    pub fn clear_player_name(&self) -> Result<(), StorageError> {
        self.store.remove(PLAYER_NAME_KEY)
    }
}
