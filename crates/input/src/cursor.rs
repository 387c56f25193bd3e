//! Board cursor clamped to the grid.

use crate::types::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Position of the highlighted tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Coord,
    rows: usize,
    cols: usize,
}

impl Cursor {
    /// Cursor at the top-left tile of a `rows`×`cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            pos: Coord::new(0, 0),
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn position(&self) -> Coord {
        self.pos
    }

    /// Step one tile; stays put at the edges
    pub fn step(&mut self, dir: Direction) {
        let Coord { row, col } = self.pos;
        self.pos = match dir {
            Direction::Up => Coord::new(row.saturating_sub(1), col),
            Direction::Down => Coord::new((row + 1).min(self.rows - 1), col),
            Direction::Left => Coord::new(row, col.saturating_sub(1)),
            Direction::Right => Coord::new(row, (col + 1).min(self.cols - 1)),
        };
    }

    pub fn reset(&mut self) {
        self.pos = Coord::new(0, 0);
    }
}
