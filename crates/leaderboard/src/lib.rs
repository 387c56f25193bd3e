//! Leaderboard module - ranked `{name, score, seed}` records
//!
//! The game treats the leaderboard as an external collaborator: it reads a
//! ranking and hands over finished scores, and neither operation may disrupt
//! play.
//!
//! # Module Structure
//!
//! - [`entry`]: Entry type, ranking, tolerant parsing
//! - [`store`]: `LeaderboardStore` trait with memory and JSON-file stores
//! - [`handler`]: Read/write endpoints with their status codes
//! - [`client`]: Best-effort wrapper used by the game
//! - [`local`]: Per-device top five and player name in client storage
//! - [`render`]: Text lines, medals, and seed dates

pub mod client;
pub mod entry;
pub mod error;
pub mod handler;
pub mod local;
pub mod render;
pub mod store;

pub use lexplosion_types as types;

pub use client::LeaderboardClient;
pub use entry::{normalize_name, rank, LeaderboardEntry};
pub use error::LeaderboardError;
pub use handler::{handle_list, handle_submit, parse_submission, HandlerResponse, SubmissionError};
pub use local::LocalHighScores;
pub use render::{format_date, medal, render_lines, EMPTY_MESSAGE};
pub use store::{FileLeaderboard, LeaderboardStore, MemoryLeaderboard, DEFAULT_CAP};
