//! Plain-text presentation of a ranking

use chrono::DateTime;

use crate::entry::LeaderboardEntry;

/// Shown instead of an empty ranking
pub const EMPTY_MESSAGE: &str = "No high scores yet!";

/// Shown under [`EMPTY_MESSAGE`]
pub const EMPTY_HINT: &str = "Be the first to make the leaderboard!";

/// Medal for a zero-based ranking position
pub fn medal(position: usize) -> &'static str {
    match position {
        0 => "🥇",
        1 => "🥈",
        2 => "🥉",
        _ => "🏅",
    }
}

/// Render a seed as a `YYYY-MM-DD` UTC date, or "Unknown Date"
pub fn format_date(seed: i64) -> String {
    DateTime::from_timestamp_millis(seed)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown Date".to_string())
}

/// One display line per entry, marking the current player
pub fn render_lines(entries: &[LeaderboardEntry], player: Option<&str>) -> Vec<String> {
    if entries.is_empty() {
        return vec![EMPTY_MESSAGE.to_string(), EMPTY_HINT.to_string()];
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let you = match player {
                Some(name) if name == entry.name => " (you)",
                _ => "",
            };
            format!(
                "{} {:<20} {:>5} pts  {}{}",
                medal(i),
                entry.name,
                entry.score,
                format_date(entry.seed),
                you
            )
        })
        .collect()
}
