use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Length of a winning run.
pub const CONNECT: usize = 4;

/// Run directions as (row step, column step): horizontal, vertical,
/// diagonal down-right, diagonal down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Four (row, column) coordinates forming a run.
pub type Run = [(usize, usize); CONNECT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Row-major grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Signed lookup used by the run scans; anything off the grid is `None`.
    fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Lowest empty row in a column, scanning from the bottom up.
    /// `None` if the column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_empty())
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Write a cell. Callers are expected to pass a row from `landing_row`.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col] = cell;
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// The run starting at (row, col) and stepping along `dir`, if all of
    /// its coordinates lie on the board.
    pub fn run_from(&self, row: usize, col: usize, dir: (isize, isize)) -> Option<Run> {
        let mut run = [(0, 0); CONNECT];
        for (step, slot) in run.iter_mut().enumerate() {
            let r = row as isize + dir.0 * step as isize;
            let c = col as isize + dir.1 * step as isize;
            if r < 0 || c < 0 || r as usize >= self.height || c as usize >= self.width {
                return None;
            }
            *slot = (r as usize, c as usize);
        }
        Some(run)
    }

    /// First run on the board held entirely by `player`, scanning every
    /// starting cell in row-major order and every direction.
    pub fn winning_run(&self, player: Player) -> Option<Run> {
        let target = player.to_cell();
        for row in 0..self.height {
            for col in 0..self.width {
                for dir in DIRECTIONS {
                    if let Some(run) = self.run_from(row, col, dir) {
                        if run
                            .iter()
                            .all(|&(r, c)| self.cells[r * self.width + c] == target)
                        {
                            return Some(run);
                        }
                    }
                }
            }
        }
        None
    }

    /// Full-board scan for four in a row held by `player`.
    pub fn has_connect_four(&self, player: Player) -> bool {
        self.winning_run(player).is_some()
    }

    /// Check if the piece at (row, col) is part of four in a row.
    ///
    /// Only runs through this cell are examined. When (row, col) is the most
    /// recent drop and nobody had won before it, the answer matches
    /// [`Board::has_connect_four`] for the piece's owner.
    pub fn connects_through(&self, row: usize, col: usize) -> bool {
        let cell = match self.get(row, col) {
            Some(cell @ Cell::Occupied(_)) => cell,
            _ => return false,
        };

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let count = 1
                + self.count_direction(row, col, (dr, dc), cell)
                + self.count_direction(row, col, (-dr, -dc), cell);
            count >= CONNECT
        })
    }

    /// Count matching cells walking away from (row, col), excluding the start.
    fn count_direction(&self, row: usize, col: usize, dir: (isize, isize), cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dir.0;
        let mut c = col as isize + dir.1;
        while self.get_signed(r, c) == Some(cell) {
            count += 1;
            r += dir.0;
            c += dir.1;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: Vec<String> = (0..self.width)
                .map(|col| match self.cells[row * self.width + col] {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(player) => player.id().to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
