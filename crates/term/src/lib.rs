//! Terminal rendering module.
//!
//! Lays a game session out as rows of styled text and writes them to the
//! terminal with `crossterm`. Layout lives in [`game_view`] and is pure;
//! [`renderer`] is the only part that performs I/O.

pub mod game_view;
pub mod renderer;
pub mod screen;

pub use lexplosion_types as types;

pub use game_view::{describe, GameView, ViewState, Viewport, HELP};
pub use renderer::TerminalRenderer;
pub use screen::{Line, Screen, Span};
