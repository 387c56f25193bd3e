//! Session module - manages the complete game state
//!
//! Ties together the grid, the selection, scoring, and the countdown.
//! Word validation happens outside the session (it is asynchronous), so a
//! submission is split in two:
//!
//! 1. [`GameSession::begin_submission`] takes the current word off the
//!    selection and returns a [`PendingSubmission`].
//! 2. [`GameSession::complete_submission`] applies the dictionary verdict.
//!
//! Between the two steps the player may keep selecting, start a new game, or
//! run out of time. A pending submission remembers the episode and the letters
//! it was made from; if either no longer matches, the verdict is discarded.

use crate::board::Grid;
use crate::scoring::{calculate_score, clear_bonus, ScoreResult};
use crate::selection::{SelectError, Selection, SubmitError};
use crate::types::*;

/// Tunable rules for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRules {
    pub rows: usize,
    pub cols: usize,
    pub duration_secs: u32,
    pub scoring: ScoringRule,
    pub end_condition: EndCondition,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            duration_secs: GAME_DURATION_SECS,
            scoring: ScoringRule::default(),
            end_condition: EndCondition::default(),
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The countdown reached zero
    TimeUp,
    /// Every cell was emptied
    GridCleared,
    /// Too few letters remain to keep playing
    FewLettersLeft,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::TimeUp => "time up",
            GameOverReason::GridCleared => "perfect clear",
            GameOverReason::FewLettersLeft => "out of letters",
        }
    }
}

/// A word taken off the selection and awaiting a dictionary verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    episode: u32,
    word: String,
    cells: Vec<Coord>,
}

impl PendingSubmission {
    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}

/// Result of applying a verdict to a pending submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Word scored and its letters collapsed away
    Accepted {
        word: String,
        points: ScoreResult,
        /// Perfect-clear bonus, zero unless this word emptied the grid
        clear_bonus: u32,
        game_over: Option<GameOverReason>,
    },
    /// Dictionary said no; nothing changed
    Rejected { word: String },
    /// The session moved on; verdict ignored
    Stale { word: String },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    rules: SessionRules,
    seed: i64,
    grid: Grid,
    selection: Selection,
    /// Monotonic episode id (increments on restart)
    episode: u32,
    score: u32,
    time_left: u32,
    game_over: Option<GameOverReason>,
    player_name: String,
    last_word: Option<String>,
    words_found: Vec<String>,
}

impl GameSession {
    /// Create a new game for `seed`
    pub fn new(seed: i64, rules: SessionRules) -> Self {
        Self {
            rules,
            seed,
            grid: Grid::generate(rules.rows, rules.cols, seed),
            selection: Selection::new(),
            episode: 0,
            score: 0,
            time_left: rules.duration_secs,
            game_over: None,
            player_name: String::new(),
            last_word: None,
            words_found: Vec::new(),
        }
    }

    /// Replace the board with a fresh one for `seed`
    ///
    /// Keeps the rules and player name. Any pending submission from the
    /// previous episode becomes stale.
    pub fn restart(&mut self, seed: i64) {
        self.seed = seed;
        self.grid = Grid::generate(self.rules.rows, self.rules.cols, seed);
        self.selection.reset();
        self.episode = self.episode.wrapping_add(1);
        self.score = 0;
        self.time_left = self.rules.duration_secs;
        self.game_over = None;
        self.last_word = None;
        self.words_found.clear();
    }

    pub fn rules(&self) -> &SessionRules {
        &self.rules
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Seconds played so far
    pub fn elapsed_secs(&self) -> u32 {
        self.rules.duration_secs.saturating_sub(self.time_left)
    }

    pub fn is_low_time(&self) -> bool {
        self.game_over.is_none() && self.time_left <= LOW_TIME_WARNING_SECS
    }

    pub fn game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Player name for leaderboard records
    pub fn display_name(&self) -> &str {
        let name = self.player_name.trim();
        if name.is_empty() {
            ANONYMOUS_PLAYER
        } else {
            name
        }
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }

    pub fn last_word(&self) -> Option<&str> {
        self.last_word.as_deref()
    }

    pub fn words_found(&self) -> &[String] {
        &self.words_found
    }

    /// Add the letter at `coord` to the selection
    pub fn select(&mut self, coord: Coord) -> Result<(), SelectError> {
        if self.game_over.is_some() {
            return Err(SelectError::GameOver);
        }
        let letter = match self.grid.get(coord) {
            None => return Err(SelectError::OutOfBounds),
            Some(None) => return Err(SelectError::EmptyCell),
            Some(Some(letter)) => letter,
        };
        self.selection.select(coord, letter)
    }

    /// Drop the current selection
    pub fn reset_selection(&mut self) {
        self.selection.reset();
    }

    /// Take the current word off the selection for validation
    ///
    /// On error the selection is kept as it was.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.game_over.is_some() {
            return Err(SubmitError::GameOver);
        }
        let (word, cells) = self.selection.submit()?;
        Ok(PendingSubmission {
            episode: self.episode,
            word,
            cells,
        })
    }

    /// True when `pending` no longer describes this session's board
    pub fn is_stale(&self, pending: &PendingSubmission) -> bool {
        if pending.episode != self.episode || self.game_over.is_some() {
            return true;
        }
        let mut letters = pending.cells.iter().map(|&c| self.grid.letter(c));
        let still_there = pending
            .word
            .chars()
            .all(|expected| letters.next() == Some(Some(expected)));
        !(still_there && letters.next().is_none())
    }

    /// Apply the dictionary verdict for `pending`
    pub fn complete_submission(
        &mut self,
        pending: PendingSubmission,
        valid: bool,
    ) -> SubmissionOutcome {
        let PendingSubmission { word, cells, .. } = &pending;
        if self.is_stale(&pending) {
            return SubmissionOutcome::Stale { word: word.clone() };
        }
        if !valid {
            return SubmissionOutcome::Rejected { word: word.clone() };
        }

        let points = calculate_score(word, self.rules.scoring);
        self.score = self.score.saturating_add(points.total);
        self.grid.collapse(cells);
        self.last_word = Some(word.clone());
        self.words_found.push(word.clone());

        let mut bonus = 0;
        let game_over = match self.rules.end_condition {
            EndCondition::GridCleared if self.grid.is_empty() => {
                bonus = clear_bonus();
                self.score = self.score.saturating_add(bonus);
                Some(GameOverReason::GridCleared)
            }
            EndCondition::FewLettersLeft(threshold) if self.grid.letter_count() <= threshold => {
                Some(GameOverReason::FewLettersLeft)
            }
            _ => None,
        };
        if game_over.is_some() {
            self.finish(game_over);
        }

        SubmissionOutcome::Accepted {
            word: word.clone(),
            points,
            clear_bonus: bonus,
            game_over,
        }
    }

    /// Advance the countdown by one second
    ///
    /// Returns `Some(TimeUp)` on the tick that ends the game.
    pub fn tick(&mut self) -> Option<GameOverReason> {
        if self.game_over.is_some() {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.finish(Some(GameOverReason::TimeUp));
            return Some(GameOverReason::TimeUp);
        }
        None
    }

    fn finish(&mut self, reason: Option<GameOverReason>) {
        self.game_over = reason;
        self.selection.reset();
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_session(rows: &[&str], end_condition: EndCondition) -> GameSession {
        let grid = Grid::from_rows(rows).unwrap();
        let rules = SessionRules {
            rows: grid.rows(),
            cols: grid.cols(),
            end_condition,
            ..SessionRules::default()
        };
        let mut session = GameSession::new(1, rules);
        *session.grid_mut() = grid;
        session
    }

    fn pick(session: &mut GameSession, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            session.select(Coord::new(r, c)).unwrap();
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(42, SessionRules::default());
        assert_eq!(session.time_left(), 120);
        assert_eq!(session.score(), 0);
        assert!(!session.game_over());
        assert_eq!(session.grid().to_rows()[0], "UGAAW");
        assert_eq!(session.display_name(), "Anonymous");
    }

    #[test]
    fn test_select_rejects_empty_and_out_of_bounds() {
        let mut session = small_session(&["A.C", "DEF"], EndCondition::GridCleared);
        assert_eq!(session.select(Coord::new(0, 1)), Err(SelectError::EmptyCell));
        assert_eq!(session.select(Coord::new(2, 0)), Err(SelectError::OutOfBounds));
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_accepted_word_scores_and_collapses() {
        let mut session = small_session(&["CAT", "XYZ"], EndCondition::GridCleared);
        pick(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        let pending = session.begin_submission().unwrap();
        assert!(session.selection().is_empty());

        let outcome = session.complete_submission(pending, true);
        match outcome {
            SubmissionOutcome::Accepted { word, points, clear_bonus, game_over } => {
                assert_eq!(word, "CAT");
                assert_eq!(points.total, 3);
                assert_eq!(clear_bonus, 0);
                assert_eq!(game_over, None);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(session.score(), 3);
        assert_eq!(session.grid().to_rows(), vec!["...", "XYZ"]);
        assert_eq!(session.last_word(), Some("CAT"));
    }

    #[test]
    fn test_rejected_word_changes_nothing() {
        let mut session = small_session(&["QXZ", "ABC"], EndCondition::GridCleared);
        pick(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        let pending = session.begin_submission().unwrap();
        let before = session.grid().clone();
        let outcome = session.complete_submission(pending, false);
        assert_eq!(outcome, SubmissionOutcome::Rejected { word: "QXZ".to_string() });
        assert_eq!(session.score(), 0);
        assert_eq!(session.grid(), &before);
    }

    #[test]
    fn test_perfect_clear_bonus() {
        let mut session = small_session(&["CAT"], EndCondition::GridCleared);
        pick(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        let pending = session.begin_submission().unwrap();
        let outcome = session.complete_submission(pending, true);
        assert!(matches!(
            outcome,
            SubmissionOutcome::Accepted {
                clear_bonus: 50,
                game_over: Some(GameOverReason::GridCleared),
                ..
            }
        ));
        assert_eq!(session.score(), 53);
        assert!(session.game_over());
    }

    #[test]
    fn test_few_letters_end_condition() {
        let mut session = small_session(&["CATS", "XY.."], EndCondition::FewLettersLeft(2));
        pick(&mut session, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        let pending = session.begin_submission().unwrap();
        session.complete_submission(pending, true);
        assert_eq!(session.game_over_reason(), Some(GameOverReason::FewLettersLeft));
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn test_restart_makes_pending_stale() {
        let mut session = small_session(&["CAT", "XYZ"], EndCondition::GridCleared);
        pick(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        let pending = session.begin_submission().unwrap();
        session.restart(99);
        assert!(session.is_stale(&pending));
        let outcome = session.complete_submission(pending, true);
        assert_eq!(outcome, SubmissionOutcome::Stale { word: "CAT".to_string() });
        assert_eq!(session.score(), 0);
        assert_eq!(session.episode(), 1);
    }

    #[test]
    fn test_overlapping_pending_submissions() {
        let mut session = small_session(&["CAT", "ORE"], EndCondition::GridCleared);
        pick(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        let first = session.begin_submission().unwrap();
        pick(&mut session, &[(0, 0), (1, 1), (1, 2)]);
        let second = session.begin_submission().unwrap();

        assert!(matches!(
            session.complete_submission(first, true),
            SubmissionOutcome::Accepted { .. }
        ));
        // "C" at (0, 0) was consumed by the first word.
        assert!(matches!(
            session.complete_submission(second, true),
            SubmissionOutcome::Stale { .. }
        ));
    }

    #[test]
    fn test_countdown_to_time_up() {
        let rules = SessionRules {
            duration_secs: 3,
            ..SessionRules::default()
        };
        let mut session = GameSession::new(5, rules);
        session.select(Coord::new(0, 0)).unwrap();
        assert_eq!(session.tick(), None);
        assert_eq!(session.tick(), None);
        assert_eq!(session.tick(), Some(GameOverReason::TimeUp));
        assert_eq!(session.time_left(), 0);
        assert!(session.selection().is_empty());
        assert_eq!(session.tick(), None);
        assert_eq!(session.select(Coord::new(0, 0)), Err(SelectError::GameOver));
        assert_eq!(session.begin_submission(), Err(SubmitError::GameOver));
    }

    #[test]
    fn test_low_time_warning() {
        let rules = SessionRules {
            duration_secs: 31,
            ..SessionRules::default()
        };
        let mut session = GameSession::new(5, rules);
        assert!(!session.is_low_time());
        session.tick();
        assert!(session.is_low_time());
        assert_eq!(session.elapsed_secs(), 1);
    }
}
