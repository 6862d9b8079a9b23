//! The 9×9 puzzle grid and its cell geometry.
//!
//! A [`Grid`] holds plain digits: 1–9 for assigned cells, 0 for
//! unassigned ones. The solver mutates it in place during search. The
//! peer relation (the 20 cells sharing a row, column or box with a given
//! cell) is derived here rather than stored anywhere.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows and columns.
pub const GRID_SIZE: usize = 9;
/// Edge length of one box.
pub const BOX_SIZE: usize = 3;
/// Total number of cells.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A `(row, column)` coordinate, both in `0..9`.
pub type Cell = (usize, usize);

/// A 9×9 grid of digits, row-major. 0 means unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid([[u8; GRID_SIZE]; GRID_SIZE]);

impl Grid {
    /// Creates a grid with every cell unassigned.
    pub fn empty() -> Self {
        Self([[0; GRID_SIZE]; GRID_SIZE])
    }

    /// Creates a grid from row-major rows of digits.
    pub fn from_rows(rows: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self(rows)
    }

    /// Parses a grid from free-form text.
    ///
    /// Digit characters `'0'`–`'9'` are read in sequence and fill the
    /// grid row-major; every other character is ignored. If the text
    /// contains fewer than 81 digits, the trailing cells stay
    /// unassigned. Never fails.
    pub fn from_text(text: &str) -> Self {
        let mut grid = Self::empty();
        let mut cells = Self::cells();
        for ch in text.chars() {
            if let Some(digit) = ch.to_digit(10) {
                match cells.next() {
                    Some(cell) => grid.set(cell, digit as u8),
                    None => break,
                }
            }
        }
        grid
    }

    /// Returns the digit at `cell` (0 if unassigned).
    pub fn get(&self, cell: Cell) -> u8 {
        self.0[cell.0][cell.1]
    }

    /// Writes `value` at `cell`. 0 unassigns the cell.
    pub fn set(&mut self, cell: Cell, value: u8) {
        debug_assert!(value <= 9, "digit out of range: {value}");
        self.0[cell.0][cell.1] = value;
    }

    /// Iterates over all cell coordinates in row-major order.
    pub fn cells() -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
    }

    /// Iterates over the coordinates of unassigned cells, row-major.
    pub fn unassigned_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Self::cells().filter(|&cell| self.get(cell) == 0)
    }

    /// Returns `true` if no cell is unassigned.
    pub fn is_complete(&self) -> bool {
        Self::cells().all(|cell| self.get(cell) != 0)
    }

    /// Checks that every row, column and box contains each of 1–9
    /// exactly once.
    pub fn is_valid_solution(&self) -> bool {
        for i in 0..GRID_SIZE {
            let mut row_seen = [false; GRID_SIZE + 1];
            let mut col_seen = [false; GRID_SIZE + 1];
            for j in 0..GRID_SIZE {
                let row_digit = self.get((i, j)) as usize;
                let col_digit = self.get((j, i)) as usize;
                if row_digit == 0 || row_seen[row_digit] {
                    return false;
                }
                if col_digit == 0 || col_seen[col_digit] {
                    return false;
                }
                row_seen[row_digit] = true;
                col_seen[col_digit] = true;
            }
        }

        for band in 0..BOX_SIZE {
            for stack in 0..BOX_SIZE {
                let mut seen = [false; GRID_SIZE + 1];
                for r in 0..BOX_SIZE {
                    for c in 0..BOX_SIZE {
                        let digit = self.get((band * BOX_SIZE + r, stack * BOX_SIZE + c)) as usize;
                        if digit == 0 || seen[digit] {
                            return false;
                        }
                        seen[digit] = true;
                    }
                }
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    /// Renders one row per line, digits separated by single spaces,
    /// each line newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for (col, digit) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{digit}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Visits the 20 peers of `cell` in a fixed, deterministic order: the
/// shared column and shared row interleaved, then the four box cells
/// whose row and column both differ from `cell`'s.
///
/// Box cells sharing a row or column with `cell` are already covered by
/// the row/column passes and are not visited twice.
pub fn for_each_peer(cell: Cell, mut visit: impl FnMut(Cell)) {
    let (row, col) = cell;
    for k in 0..GRID_SIZE {
        if k != row {
            visit((k, col));
        }
        if k != col {
            visit((row, k));
        }
    }
    let band = row / BOX_SIZE * BOX_SIZE;
    let stack = col / BOX_SIZE * BOX_SIZE;
    for r in band..band + BOX_SIZE {
        for c in stack..stack + BOX_SIZE {
            if r != row && c != col {
                visit((r, c));
            }
        }
    }
}
