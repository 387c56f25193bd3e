//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the word-collapse game: board generation,
//! letter selection, scoring, and the session state machine.
//! It has **zero dependencies** on rendering, networking, or storage, making it:
//!
//! - **Deterministic**: Same seed produces the same board on every client
//! - **Testable**: Unit tests cover every rule without a dictionary or a clock
//! - **Portable**: Drives a terminal front-end or any other host
//!
//! # Module Structure
//!
//! - [`board`]: Letter grid, seeded generation, and column collapse
//! - [`rng`]: Sine-based generator shared with the browser version
//! - [`selection`]: Adjacency-checked word building
//! - [`scoring`]: Points per word, long-word bonus, clear bonus
//! - [`session`]: Game state including countdown and pending submissions
//!
//! # Game Rules
//!
//! - **Selection**: Each letter must touch the previous one, diagonals included,
//!   and a cell is used at most once per word
//! - **Words**: Three letters minimum, checked against an external dictionary
//! - **Collapse**: Used letters disappear and the letters above fall down
//! - **End**: The countdown runs out, or the board-driven end condition fires
//!
//! # Example
//!
//! ```
//! use lexplosion_core::{GameSession, SessionRules, SubmissionOutcome};
//! use lexplosion_core::types::Coord;
//!
//! let mut game = GameSession::new(42, SessionRules::default());
//! assert_eq!(game.grid().to_rows()[1], "TLMGH");
//!
//! // Walk three touching cells.
//! game.select(Coord::new(0, 0)).unwrap();
//! game.select(Coord::new(1, 1)).unwrap();
//! game.select(Coord::new(2, 2)).unwrap();
//! assert_eq!(game.selection().word(), "ULC");
//!
//! // The dictionary verdict arrives later.
//! let pending = game.begin_submission().unwrap();
//! let outcome = game.complete_submission(pending, false);
//! assert!(matches!(outcome, SubmissionOutcome::Rejected { .. }));
//! ```

pub mod board;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod session;

pub use lexplosion_types as types;

// Re-export commonly used types for convenience
pub use board::Grid;
pub use rng::SineRng;
pub use scoring::{calculate_score, score, ScoreResult};
pub use selection::{is_connected_path, SelectError, Selection, SubmitError};
pub use session::{
    GameOverReason, GameSession, PendingSubmission, SessionRules, SubmissionOutcome,
};
