//! Selection module - the player's in-progress word
//!
//! Tracks the ordered cells the player has picked and the word they spell.
//! Each new cell must touch the previous one (including diagonals) and may
//! only be used once per word.

use std::fmt;

use crate::types::{Coord, MIN_WORD_LEN};

/// Why a cell was not added to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The cell is already part of the current word
    AlreadySelected,
    /// The cell does not touch the last selected cell
    NotAdjacent,
    /// The coordinate lies outside the grid
    OutOfBounds,
    /// The cell has no letter
    EmptyCell,
    /// The game has ended
    GameOver,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::AlreadySelected => write!(f, "cell is already selected"),
            SelectError::NotAdjacent => write!(f, "cell is not adjacent to the last letter"),
            SelectError::OutOfBounds => write!(f, "cell is outside the grid"),
            SelectError::EmptyCell => write!(f, "cell is empty"),
            SelectError::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Why a selection could not be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Nothing is selected
    EmptySelection,
    /// Fewer than `MIN_WORD_LEN` letters
    TooShort { len: usize },
    /// The game has ended
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::EmptySelection => write!(f, "select letters to form a word"),
            SubmitError::TooShort { len } => write!(
                f,
                "word has {} letters, at least {} are needed",
                len, MIN_WORD_LEN
            ),
            SubmitError::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Ordered selection of grid cells and the word they spell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<Coord>,
    word: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to append `coord` holding `letter`
    ///
    /// On rejection the selection is left untouched.
    pub fn select(&mut self, coord: Coord, letter: char) -> Result<(), SelectError> {
        if self.contains(coord) {
            return Err(SelectError::AlreadySelected);
        }
        if let Some(last) = self.last() {
            if !last.is_adjacent(coord) {
                return Err(SelectError::NotAdjacent);
            }
        }
        self.cells.push(coord);
        self.word.push(letter);
        Ok(())
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        self.cells.clear();
        self.word.clear();
    }

    /// Hand over the word and its cells, leaving the selection empty
    ///
    /// Fails without clearing anything if the word cannot be submitted.
    pub fn submit(&mut self) -> Result<(String, Vec<Coord>), SubmitError> {
        if self.cells.is_empty() {
            return Err(SubmitError::EmptySelection);
        }
        let len = self.len();
        if len < MIN_WORD_LEN {
            return Err(SubmitError::TooShort { len });
        }
        let cells = std::mem::take(&mut self.cells);
        let word = std::mem::take(&mut self.word);
        Ok((word, cells))
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of letters in the current word
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when the word is long enough to submit
    pub fn can_submit(&self) -> bool {
        self.len() >= MIN_WORD_LEN
    }
}

/// True when `cells` is non-empty, duplicate-free, and each cell touches the previous one
pub fn is_connected_path(cells: &[Coord]) -> bool {
    if cells.is_empty() {
        return false;
    }
    for (i, cell) in cells.iter().enumerate() {
        if cells[..i].contains(cell) {
            return false;
        }
    }
    cells.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_select_builds_word() {
        let mut sel = Selection::new();
        sel.select(c(0, 0), 'C').unwrap();
        sel.select(c(1, 1), 'A').unwrap();
        sel.select(c(1, 2), 'T').unwrap();
        assert_eq!(sel.word(), "CAT");
        assert_eq!(sel.cells(), &[c(0, 0), c(1, 1), c(1, 2)]);
        assert!(sel.can_submit());
    }

    #[test]
    fn test_select_rejects_far_cell() {
        let mut sel = Selection::new();
        sel.select(c(0, 0), 'C').unwrap();
        assert_eq!(sel.select(c(2, 0), 'X'), Err(SelectError::NotAdjacent));
        assert_eq!(sel.select(c(0, 2), 'X'), Err(SelectError::NotAdjacent));
        assert_eq!(sel.word(), "C");
        assert_eq!(sel.cells().len(), 1);
    }

    #[test]
    fn test_select_rejects_repeat() {
        let mut sel = Selection::new();
        sel.select(c(0, 0), 'A').unwrap();
        sel.select(c(0, 1), 'B').unwrap();
        assert_eq!(sel.select(c(0, 0), 'A'), Err(SelectError::AlreadySelected));
        assert_eq!(sel.word(), "AB");
    }

    #[test]
    fn test_first_cell_anywhere() {
        let mut sel = Selection::new();
        assert!(sel.select(c(4, 4), 'Z').is_ok());
    }

    #[test]
    fn test_submit_too_short_keeps_selection() {
        let mut sel = Selection::new();
        sel.select(c(0, 0), 'A').unwrap();
        sel.select(c(0, 1), 'B').unwrap();
        assert_eq!(sel.submit(), Err(SubmitError::TooShort { len: 2 }));
        assert_eq!(sel.word(), "AB");
    }

    #[test]
    fn test_submit_empty() {
        let mut sel = Selection::new();
        assert_eq!(sel.submit(), Err(SubmitError::EmptySelection));
    }

    #[test]
    fn test_submit_clears() {
        let mut sel = Selection::new();
        sel.select(c(0, 0), 'D').unwrap();
        sel.select(c(0, 1), 'O').unwrap();
        sel.select(c(0, 2), 'G').unwrap();
        let (word, cells) = sel.submit().unwrap();
        assert_eq!(word, "DOG");
        assert_eq!(cells.len(), 3);
        assert!(sel.is_empty());
        assert_eq!(sel.word(), "");
    }

    #[test]
    fn test_reset() {
        let mut sel = Selection::new();
        sel.select(c(2, 2), 'Q').unwrap();
        sel.reset();
        assert!(sel.is_empty());
        assert!(sel.select(c(0, 0), 'A').is_ok());
    }

    #[test]
    fn test_connected_path() {
        assert!(is_connected_path(&[c(0, 0), c(1, 1), c(2, 1)]));
        assert!(!is_connected_path(&[]));
        assert!(!is_connected_path(&[c(0, 0), c(2, 2)]));
        assert!(!is_connected_path(&[c(0, 0), c(0, 1), c(0, 0)]));
    }
}
