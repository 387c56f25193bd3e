//! Board module - manages the letter grid
//!
//! The grid is `rows x cols` cells, each holding an uppercase letter or nothing.
//! Uses a flat vector in row-major order (`row * cols + col`).
//! Coordinates: (row, col) where row 0 is the top; letters fall towards the
//! last row when cells below them are consumed.

use arrayvec::ArrayVec;

use crate::rng::SineRng;
use crate::types::{Cell, Coord};

/// The letter grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Generate the board for `seed`
    ///
    /// Cells are filled in row-major order, one generator draw per cell, so the
    /// same `(rows, cols, seed)` always yields the same letters.
    pub fn generate(rows: usize, cols: usize, seed: i64) -> Self {
        let mut rng = SineRng::new(seed);
        let cells = (0..rows * cols).map(|_| Some(rng.next_letter())).collect();
        Self { rows, cols, cells }
    }

    /// Build a grid from text rows; `.` or a space marks an empty cell
    ///
    /// Returns `None` when the rows have different lengths.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let cols = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.chars().count() != cols {
                return None;
            }
            cells.extend(row.chars().map(|c| match c {
                '.' | ' ' => None,
                c => Some(c.to_ascii_uppercase()),
            }));
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        Some(coord.row * self.cols + coord.col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at `coord`
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Letter at `coord`, if in bounds and not empty
    pub fn letter(&self, coord: Coord) -> Option<char> {
        self.get(coord).flatten()
    }

    /// Set cell at `coord`
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// In-bounds neighbours of `coord` (up to eight)
    pub fn neighbors(&self, coord: Coord) -> ArrayVec<Coord, 8> {
        let mut out = ArrayVec::new();
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let row = coord.row as i64 + dr;
                let col = coord.col as i64 + dc;
                if row < 0 || col < 0 {
                    continue;
                }
                let n = Coord::new(row as usize, col as usize);
                if self.contains(n) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// Number of non-empty cells
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Remove the cells at `coords` and let each touched column fall
    ///
    /// Per column, the surviving letters keep their order and settle at the
    /// bottom; the freed cells at the top become empty. Every selected cell
    /// removes exactly one letter from its column, whatever order the
    /// coordinates arrive in. Out-of-bounds and duplicate coordinates are ignored.
    ///
    /// Returns the number of cells removed.
    pub fn collapse(&mut self, coords: &[Coord]) -> usize {
        let mut removed_rows: Vec<Vec<bool>> = vec![Vec::new(); self.cols];
        let mut removed = 0usize;

        for &coord in coords {
            if !self.contains(coord) {
                continue;
            }
            let col = &mut removed_rows[coord.col];
            if col.is_empty() {
                col.resize(self.rows, false);
            }
            if !col[coord.row] {
                col[coord.row] = true;
                removed += 1;
            }
        }

        for (col, rows) in removed_rows.iter().enumerate() {
            if rows.is_empty() {
                continue;
            }
            self.collapse_column(col, rows);
        }

        removed
    }

    /// Two-pointer compaction of one column, scanning bottom to top
    fn collapse_column(&mut self, col: usize, removed: &[bool]) {
        let mut write_row = self.rows;

        for read_row in (0..self.rows).rev() {
            if removed[read_row] {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * self.cols + col;
                let dst = write_row * self.cols + col;
                self.cells[dst] = self.cells[src];
            }
        }

        for row in 0..write_row {
            self.cells[row * self.cols + col] = None;
        }
    }

    /// Row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Rows as strings with `.` for empty cells
    pub fn to_rows(&self) -> Vec<String> {
        self.iter_rows()
            .map(|row| row.iter().map(|c| c.unwrap_or('.')).collect())
            .collect()
    }
}
