//! Shareable boards
//!
//! A board is shared as a URL carrying its seed, e.g. `https://host/?seed=42`.
//! Anyone opening the link regenerates the identical grid.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Seed carried by a query string such as `?seed=42&x=1`
///
/// Integer values are taken as-is; finite decimals are truncated. Anything
/// else yields `None`.
pub fn seed_from_query(query: &str) -> Option<i64> {
    let query = query.trim_start_matches('?');
    let raw = query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "seed")
        .map(|(_, value)| value.trim())?;

    if let Ok(seed) = raw.parse::<i64>() {
        return Some(seed);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() < i64::MAX as f64)
        .map(|v| v.trunc() as i64)
}

/// Seed from the query string, or the current time when absent or invalid
pub fn seed_or_now(query: &str) -> i64 {
    seed_from_query(query).unwrap_or_else(now_millis)
}

/// Link that reopens the board for `seed`
pub fn share_url(origin: &str, seed: i64) -> String {
    format!("{}?seed={}", origin.trim_end_matches('/'), seed)
}

/// Render seconds as `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Message shared after a game
pub fn share_message(score: u32, elapsed_secs: u32, url: &str) -> String {
    format!(
        "🎮 Word Collapse\n📊 Score: {}\n⏱️ Time: {}\n\nPlay my board: {}",
        score,
        format_time(elapsed_secs),
        url
    )
}
