//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, dictionary validation, leaderboard, rendering).
//!
//! # Board Dimensions
//!
//! - **Rows**: 5 (indexed 0-4, row 0 is the top)
//! - **Cols**: 5 (indexed 0-4)
//!
//! Letters fall towards the bottom row when cells are consumed.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GAME_DURATION_SECS` | 120 | Countdown length of a session |
//! | `MIN_WORD_LEN` | 3 | Shortest word that can be submitted |
//! | `BONUS_THRESHOLD_LEN` | 4 | Letters beyond this length earn a bonus |
//! | `BONUS_PER_EXTRA_LETTER` | 2 | Bonus points per extra letter |
//! | `CLEAR_BONUS` | 50 | Points for emptying the whole grid |
//! | `LOW_TIME_WARNING_SECS` | 30 | Remaining time that triggers the warning |
//!
//! # Examples
//!
//! ```
//! use lexplosion_types::{Coord, ScoringRule, EndCondition, DEFAULT_ROWS, DEFAULT_COLS};
//!
//! let a = Coord::new(1, 1);
//! assert!(a.is_adjacent(Coord::new(2, 2)));
//! assert!(!a.is_adjacent(Coord::new(3, 1)));
//!
//! assert_eq!(ScoringRule::from_str("bonus"), Some(ScoringRule::LengthWithBonus));
//! assert_eq!(EndCondition::from_str("few-letters"), Some(EndCondition::FewLettersLeft(2)));
//!
//! assert_eq!(DEFAULT_ROWS, 5);
//! assert_eq!(DEFAULT_COLS, 5);
//! ```

/// Default grid height (5 rows)
pub const DEFAULT_ROWS: usize = 5;

/// Default grid width (5 columns)
pub const DEFAULT_COLS: usize = 5;

/// Letters a generated cell can hold, in generator index order
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a session countdown in seconds
pub const GAME_DURATION_SECS: u32 = 120;

/// Remaining seconds at which the front-end warns that time is running out
pub const LOW_TIME_WARNING_SECS: u32 = 30;

/// Minimum number of letters in a submittable word
pub const MIN_WORD_LEN: usize = 3;

/// Words longer than this earn bonus points
pub const BONUS_THRESHOLD_LEN: usize = 4;

/// Bonus points per letter beyond `BONUS_THRESHOLD_LEN`
pub const BONUS_PER_EXTRA_LETTER: u32 = 2;

/// Bonus for emptying the entire grid
pub const CLEAR_BONUS: u32 = 50;

/// Remaining-letter threshold used by `EndCondition::FewLettersLeft` by default
pub const FEW_LETTERS_THRESHOLD: usize = 2;

/// Player name used when none was entered
pub const ANONYMOUS_PLAYER: &str = "Anonymous";

/// A cell on the grid
///
/// - `None`: Empty cell (consumed and collapsed away)
/// - `Some(char)`: Uppercase letter
pub type Cell = Option<char>;

/// A grid coordinate. Row 0 is the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance between two coordinates
    ///
    /// # Examples
    ///
    /// ```
    /// use lexplosion_types::Coord;
    ///
    /// assert_eq!(Coord::new(0, 0).distance(Coord::new(2, 1)), 2);
    /// assert_eq!(Coord::new(3, 3).distance(Coord::new(3, 3)), 0);
    /// ```
    pub fn distance(&self, other: Coord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// True when `other` is one of the eight surrounding cells
    ///
    /// A coordinate is not adjacent to itself.
    pub fn is_adjacent(&self, other: Coord) -> bool {
        self.distance(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Points awarded for an accepted word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// One point per letter
    LengthOnly,
    /// One point per letter plus `(len - 4) * 2` for words of five letters or more
    #[default]
    LengthWithBonus,
}

impl ScoringRule {
    /// Parse scoring rule from string (case-insensitive)
    ///
    /// Accepts "length" | "plain" and "bonus" | "length-bonus".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" | "plain" | "length-only" => Some(ScoringRule::LengthOnly),
            "bonus" | "length-bonus" => Some(ScoringRule::LengthWithBonus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringRule::LengthOnly => "length",
            ScoringRule::LengthWithBonus => "bonus",
        }
    }
}

/// Board-driven game-over trigger. The countdown reaching zero always ends a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCondition {
    /// Game ends when every cell is empty; awards `CLEAR_BONUS`
    GridCleared,
    /// Game ends when at most this many letters remain; no bonus
    FewLettersLeft(usize),
}

impl Default for EndCondition {
    fn default() -> Self {
        EndCondition::GridCleared
    }
}

impl EndCondition {
    /// Parse end condition from string (case-insensitive)
    ///
    /// "cleared" | "grid-cleared", or "few-letters" with an optional ":N" threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexplosion_types::EndCondition;
    ///
    /// assert_eq!(EndCondition::from_str("cleared"), Some(EndCondition::GridCleared));
    /// assert_eq!(EndCondition::from_str("few-letters:4"), Some(EndCondition::FewLettersLeft(4)));
    /// assert_eq!(EndCondition::from_str("sometimes"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let (name, arg) = match lower.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (lower.as_str(), None),
        };
        match (name, arg) {
            ("cleared" | "grid-cleared", None) => Some(EndCondition::GridCleared),
            ("few-letters" | "few", None) => Some(EndCondition::FewLettersLeft(FEW_LETTERS_THRESHOLD)),
            ("few-letters" | "few", Some(n)) => n.parse().ok().map(EndCondition::FewLettersLeft),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EndCondition::GridCleared => "cleared",
            EndCondition::FewLettersLeft(_) => "few-letters",
        }
    }
}

/// How a dictionary response decides validity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidityPolicy {
    /// Exact case-insensitive match carrying at least one definition
    #[default]
    Strict,
    /// Any non-empty result set
    Loose,
}

impl ValidityPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Some(ValidityPolicy::Strict),
            "loose" => Some(ValidityPolicy::Loose),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidityPolicy::Strict => "strict",
            ValidityPolicy::Loose => "loose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_defaults() {
        assert_eq!(GAME_DURATION_SECS, 120);
        assert_eq!(MIN_WORD_LEN, 3);
        assert_eq!(CLEAR_BONUS, 50);
        assert_eq!(ALPHABET.len(), 26);
        assert_eq!(ScoringRule::default(), ScoringRule::LengthWithBonus);
        assert_eq!(EndCondition::default(), EndCondition::GridCleared);
        assert_eq!(ValidityPolicy::default(), ValidityPolicy::Strict);
    }

    #[test]
    fn adjacency_is_chebyshev_one() {
        let centre = Coord::new(2, 2);
        for row in 1..=3 {
            for col in 1..=3 {
                let other = Coord::new(row, col);
                assert_eq!(centre.is_adjacent(other), other != centre);
            }
        }
        assert!(!centre.is_adjacent(Coord::new(0, 2)));
        assert!(!centre.is_adjacent(Coord::new(4, 4)));
    }

    #[test]
    fn policy_names_round_trip() {
        for rule in [ScoringRule::LengthOnly, ScoringRule::LengthWithBonus] {
            assert_eq!(ScoringRule::from_str(rule.as_str()), Some(rule));
        }
        for policy in [ValidityPolicy::Strict, ValidityPolicy::Loose] {
            assert_eq!(ValidityPolicy::from_str(policy.as_str()), Some(policy));
        }
        assert_eq!(EndCondition::from_str("FEW"), Some(EndCondition::FewLettersLeft(2)));
        assert_eq!(EndCondition::from_str("few-letters:x"), None);
        assert_eq!(EndCondition::from_str("cleared:3"), None);
    }
}
