//! Terminal input module.
//!
//! Maps `crossterm` key events into [`Command`]s, tracks the board cursor,
//! and edits the player name. Nothing here touches the game session directly.

pub mod cursor;
pub mod map;
pub mod name;

pub use lexplosion_types as types;

pub use cursor::{Cursor, Direction};
pub use map::{handle_key_event, should_quit, Command};
pub use name::{NameEntry, NameInput, MAX_NAME_LEN};
