//! Leaderboard entries and ranking

use serde::{Deserialize, Serialize};

use crate::types::ANONYMOUS_PLAYER;

/// One recorded score
///
/// `seed` doubles as a millisecond timestamp for display; boards started from
/// the clock use the current time as their seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub seed: i64,
}

impl LeaderboardEntry {
    /// New entry; a blank name becomes `Anonymous`
    pub fn new(name: impl Into<String>, score: u32, seed: i64) -> Self {
        Self {
            name: normalize_name(&name.into()),
            score,
            seed,
        }
    }
}

/// Trimmed name, or `Anonymous` when blank
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        ANONYMOUS_PLAYER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sort by score descending and keep at most `cap` entries
///
/// The sort is stable, so equal scores keep insertion order.
pub fn rank(entries: &mut Vec<LeaderboardEntry>, cap: Option<usize>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(cap) = cap {
        entries.truncate(cap);
    }
}

/// Parse stored leaderboard JSON
///
/// Anything that is not an array of entries is treated as an empty board.
/// Individual records missing a name, score, or seed are skipped.
pub fn parse_entries(text: &str) -> Vec<LeaderboardEntry> {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[Leaderboard] unreadable leaderboard data: {}", e);
            return Vec::new();
        }
    };
    let serde_json::Value::Array(items) = value else {
        log::warn!("[Leaderboard] leaderboard data is not an array; treating as empty");
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<LeaderboardEntry>(item).ok())
        .filter(|e| !e.name.trim().is_empty())
        .collect()
}
