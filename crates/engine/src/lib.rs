//! Engine module - async wiring around a game session
//!
//! # Module Structure
//!
//! - [`config`]: `GameConfig` with environment overrides
//! - [`countdown`]: Cancellable one-second countdown task
//! - [`controller`]: `GameController` and the [`GameEvent`] stream
//! - [`backend`]: Dictionary, storage, and leaderboard built from config
//! - [`share`]: Seeds from query strings and share text

pub mod backend;
pub mod config;
pub mod controller;
pub mod countdown;
pub mod share;

pub use lexplosion_types as types;

pub use backend::{
    build_dictionary, build_leaderboard, build_local_scores, build_validator, open_storage,
    AnyDictionary,
};
pub use config::{GameConfig, MAX_GRID_SIDE};
pub use controller::{GameController, GameEvent};
pub use countdown::Countdown;
pub use share::{format_time, now_millis, seed_from_query, seed_or_now, share_message, share_url};
