use std::fmt;

/// Failure reading or writing a leaderboard store
#[derive(Debug)]
pub enum LeaderboardError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Background task ended without reporting
    Task(String),
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardError::Io(e) => write!(f, "leaderboard I/O failed: {}", e),
            LeaderboardError::Json(e) => write!(f, "leaderboard encoding failed: {}", e),
            LeaderboardError::Task(msg) => write!(f, "leaderboard task failed: {}", msg),
        }
    }
}

impl std::error::Error for LeaderboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeaderboardError::Io(e) => Some(e),
            LeaderboardError::Json(e) => Some(e),
            LeaderboardError::Task(_) => None,
        }
    }
}

impl From<std::io::Error> for LeaderboardError {
    fn from(err: std::io::Error) -> Self {
        LeaderboardError::Io(err)
    }
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(err: serde_json::Error) -> Self {
        LeaderboardError::Json(err)
    }
}
