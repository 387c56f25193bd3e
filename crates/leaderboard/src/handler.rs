//! Request handlers for the leaderboard endpoints
//!
//! These are the read and write endpoints in transport-neutral form: a method
//! and body go in, a status code and JSON body come out.
//!
//! | Endpoint | Success | Client errors | Store failure |
//! |----------|---------|---------------|---------------|
//! | list | 200 + array | - | 500 |
//! | submit | 201 | 405 (not POST), 400 (bad body) | 500 |

use std::fmt;

use serde_json::{json, Value};

use crate::entry::LeaderboardEntry;
use crate::store::LeaderboardStore;

/// Status code and JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: String,
}

impl HandlerResponse {
    fn json(status: u16, value: Value) -> Self {
        Self {
            status,
            body: value.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why a submission body was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    InvalidJson(String),
    /// Score absent, not a number, negative, or fractional
    InvalidScore,
    MissingSeed,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::InvalidJson(msg) => write!(f, "request body is not JSON: {}", msg),
            SubmissionError::InvalidScore => write!(f, "score must be a non-negative integer"),
            SubmissionError::MissingSeed => write!(f, "seed is required"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Parse a `{name, score, seed}` body
///
/// `playerName` is accepted in place of `name`; a missing or blank name is
/// recorded as `Anonymous`. The seed may be a number or a numeric string.
pub fn parse_submission(body: &str) -> Result<LeaderboardEntry, SubmissionError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| SubmissionError::InvalidJson(e.to_string()))?;

    let name = value
        .get("name")
        .or_else(|| value.get("playerName"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    let score = value
        .get("score")
        .and_then(Value::as_u64)
        .and_then(|s| u32::try_from(s).ok())
        .ok_or(SubmissionError::InvalidScore)?;

    let seed = match value.get("seed") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or(SubmissionError::MissingSeed)?;

    Ok(LeaderboardEntry::new(name, score, seed))
}

/// Read endpoint
pub async fn handle_list<S: LeaderboardStore>(store: &S) -> HandlerResponse {
    match store.list().await {
        Ok(entries) => match serde_json::to_value(&entries) {
            Ok(value) => HandlerResponse::json(200, value),
            Err(e) => failure("Failed to fetch leaderboard", &e),
        },
        Err(e) => {
            log::error!("[Leaderboard] error reading leaderboard: {}", e);
            failure("Failed to fetch leaderboard", &e)
        }
    }
}

/// Write endpoint
pub async fn handle_submit<S: LeaderboardStore>(
    store: &S,
    method: &str,
    body: &str,
) -> HandlerResponse {
    if !method.eq_ignore_ascii_case("POST") {
        return HandlerResponse::json(405, json!({ "error": "Method not allowed" }));
    }

    let entry = match parse_submission(body) {
        Ok(entry) => entry,
        Err(e) => {
            return HandlerResponse::json(
                400,
                json!({ "error": "Invalid request data", "details": e.to_string() }),
            );
        }
    };

    match store.submit(entry).await {
        Ok(()) => HandlerResponse::json(201, json!({ "message": "Leaderboard updated successfully" })),
        Err(e) => {
            log::error!("[Leaderboard] error updating leaderboard: {}", e);
            failure("Failed to update leaderboard", &e)
        }
    }
}

fn failure(message: &str, err: &dyn fmt::Display) -> HandlerResponse {
    HandlerResponse::json(500, json!({ "error": message, "details": err.to_string() }))
}
