//! Game configuration
//!
//! Every setting has a default and can be overridden through environment
//! variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LEXPLOSION_ROWS` / `LEXPLOSION_COLS` | 5 / 5 | Grid size, at most 26 a side |
//! | `LEXPLOSION_DURATION_SECS` | 120 | Countdown length |
//! | `LEXPLOSION_SCORING` | `bonus` | `bonus` or `length` |
//! | `LEXPLOSION_END_CONDITION` | `cleared` | `cleared` or `few-letters[:N]` |
//! | `LEXPLOSION_VALIDITY` | `strict` | `strict` or `loose` |
//! | `LEXPLOSION_DICTIONARY_HOST` | `api.datamuse.com` | Dictionary host |
//! | `LEXPLOSION_DICTIONARY_PORT` | 80 | Dictionary port |
//! | `LEXPLOSION_DICTIONARY_TIMEOUT_MS` | 5000 | Per-lookup timeout |
//! | `LEXPLOSION_WORD_LIST` | unset | Word list file; enables offline play |
//! | `LEXPLOSION_OFFLINE` | unset | `1`/`true` to skip the network dictionary |
//! | `LEXPLOSION_LEADERBOARD_PATH` | `<tmp>/leaderboard.json` | Leaderboard file |
//! | `LEXPLOSION_LEADERBOARD_CAP` | 10 | Entries kept; `0` keeps all |
//! | `LEXPLOSION_STORAGE_PATH` | unset | Client storage file; memory when unset |
//! | `LEXPLOSION_SHARE_ORIGIN` | `http://localhost:8080/` | Base of share links |

use std::path::PathBuf;
use std::time::Duration;

use lexplosion_core::SessionRules;
use lexplosion_dictionary::http::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT};
use lexplosion_leaderboard::DEFAULT_CAP;

use crate::types::{EndCondition, ScoringRule, ValidityPolicy};

/// Largest accepted grid side; bigger values are clamped
pub const MAX_GRID_SIDE: usize = 26;

/// Where share links point when no origin is configured
pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:8080/";

/// Complete game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub rules: SessionRules,
    pub validity: ValidityPolicy,
    pub dictionary_host: String,
    pub dictionary_port: u16,
    pub dictionary_timeout: Duration,
    pub word_list_path: Option<PathBuf>,
    pub offline: bool,
    pub leaderboard_path: PathBuf,
    pub leaderboard_cap: Option<usize>,
    pub storage_path: Option<PathBuf>,
    pub share_origin: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: SessionRules::default(),
            validity: ValidityPolicy::default(),
            dictionary_host: DEFAULT_HOST.to_string(),
            dictionary_port: DEFAULT_PORT,
            dictionary_timeout: DEFAULT_TIMEOUT,
            word_list_path: None,
            offline: false,
            leaderboard_path: std::env::temp_dir().join("leaderboard.json"),
            leaderboard_cap: Some(DEFAULT_CAP),
            storage_path: None,
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
        }
    }
}

fn flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn grid_side(value: &str) -> Option<usize> {
    let n: usize = value.parse().ok().filter(|&n| n > 0)?;
    if n > MAX_GRID_SIDE {
        log::warn!("[Config] grid side {} clamped to {}", n, MAX_GRID_SIDE);
    }
    Some(n.min(MAX_GRID_SIDE))
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable source
    ///
    /// Unparseable values fall back to the default and are logged.
    pub fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| get(key).and_then(non_empty);

        fn parsed<T, P>(key: &str, raw: Option<String>, parse: P, default: T) -> T
        where
            P: FnOnce(&str) -> Option<T>,
        {
            match raw {
                None => default,
                Some(raw) => parse(&raw).unwrap_or_else(|| {
                    log::warn!("[Config] ignoring invalid {}={:?}", key, raw);
                    default
                }),
            }
        }

        let rows = parsed(
            "LEXPLOSION_ROWS",
            get("LEXPLOSION_ROWS"),
            grid_side,
            defaults.rules.rows,
        );
        let cols = parsed(
            "LEXPLOSION_COLS",
            get("LEXPLOSION_COLS"),
            grid_side,
            defaults.rules.cols,
        );
        let duration_secs = parsed(
            "LEXPLOSION_DURATION_SECS",
            get("LEXPLOSION_DURATION_SECS"),
            |s| s.parse().ok().filter(|&n: &u32| n > 0),
            defaults.rules.duration_secs,
        );
        let scoring = parsed(
            "LEXPLOSION_SCORING",
            get("LEXPLOSION_SCORING"),
            ScoringRule::from_str,
            defaults.rules.scoring,
        );
        let end_condition = parsed(
            "LEXPLOSION_END_CONDITION",
            get("LEXPLOSION_END_CONDITION"),
            EndCondition::from_str,
            defaults.rules.end_condition,
        );
        let validity = parsed(
            "LEXPLOSION_VALIDITY",
            get("LEXPLOSION_VALIDITY"),
            ValidityPolicy::from_str,
            defaults.validity,
        );
        let dictionary_port = parsed(
            "LEXPLOSION_DICTIONARY_PORT",
            get("LEXPLOSION_DICTIONARY_PORT"),
            |s| s.parse().ok(),
            defaults.dictionary_port,
        );
        let dictionary_timeout = parsed(
            "LEXPLOSION_DICTIONARY_TIMEOUT_MS",
            get("LEXPLOSION_DICTIONARY_TIMEOUT_MS"),
            |s| s.parse().ok().map(Duration::from_millis),
            defaults.dictionary_timeout,
        );
        let leaderboard_cap = parsed(
            "LEXPLOSION_LEADERBOARD_CAP",
            get("LEXPLOSION_LEADERBOARD_CAP"),
            |s| s.parse::<usize>().ok().map(|n| if n == 0 { None } else { Some(n) }),
            defaults.leaderboard_cap,
        );

        Self {
            rules: SessionRules {
                rows,
                cols,
                duration_secs,
                scoring,
                end_condition,
            },
            validity,
            dictionary_host: get("LEXPLOSION_DICTIONARY_HOST").unwrap_or(defaults.dictionary_host),
            dictionary_port,
            dictionary_timeout,
            word_list_path: get("LEXPLOSION_WORD_LIST").map(PathBuf::from),
            offline: get("LEXPLOSION_OFFLINE").map(|v| flag(&v)).unwrap_or(false),
            leaderboard_path: get("LEXPLOSION_LEADERBOARD_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.leaderboard_path),
            leaderboard_cap,
            storage_path: get("LEXPLOSION_STORAGE_PATH").map(PathBuf::from),
            share_origin: get("LEXPLOSION_SHARE_ORIGIN").unwrap_or(defaults.share_origin),
        }
    }

    /// True when words are checked against a local list instead of the network
    pub fn uses_word_list(&self) -> bool {
        self.offline || self.word_list_path.is_some()
    }
}
