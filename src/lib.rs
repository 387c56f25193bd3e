//! Lexplosion (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests, and the benches can write `lexplosion::core::Grid`
//! instead of naming each member crate.

pub use lexplosion_core as core;
pub use lexplosion_dictionary as dictionary;
pub use lexplosion_engine as engine;
pub use lexplosion_input as input;
pub use lexplosion_leaderboard as leaderboard;
pub use lexplosion_term as term;
pub use lexplosion_types as types;
