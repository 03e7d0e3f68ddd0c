use crate::error::MoveError;

use super::player::Player;
use super::win;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Black,
}

impl Cell {
    /// Display character used in the text rendering.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Red => 'R',
            Cell::Black => 'B',
        }
    }
}

/// Result of a single placement. Returned to the caller, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    NoWin,
    Win,
    BoardFull,
}

/// A rectangular drop-piece board with gravity.
///
/// `grid[row][col]` with row 0 at the bottom; pieces in a column always
/// occupy the contiguous range `[0, fill_level)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec<Vec<Cell>>,
    fill_levels: Vec<usize>,
    connect: usize,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions and the target run length must be positive; callers go
    /// through a validated [`GameConfig`](crate::config::GameConfig).
    pub fn new(width: usize, height: usize, connect: usize) -> Self {
        debug_assert!(width > 0 && height > 0 && connect > 0);
        Board {
            grid: vec![vec![Cell::Empty; width]; height],
            fill_levels: vec![0; width],
            connect,
        }
    }

    pub fn width(&self) -> usize {
        self.fill_levels.len()
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Target run length required to win.
    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Get the cell at a specific position. Row 0 is the bottom.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// Number of pieces in a column; also the row the next piece lands on.
    pub fn fill_level(&self, col: usize) -> usize {
        self.fill_levels[col]
    }

    /// Check whether a column can accept another piece.
    pub fn valid_location(&self, col: usize) -> bool {
        col < self.width() && self.fill_levels[col] < self.height()
    }

    /// List of columns that can accept a piece.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width())
            .filter(|&col| self.valid_location(col))
            .collect()
    }

    /// Check if every column is full.
    pub fn is_full(&self) -> bool {
        self.fill_levels.iter().all(|&fill| fill >= self.height())
    }

    /// Drop a piece in a column and classify the result.
    ///
    /// Rejects out-of-range and full columns before touching any state, so a
    /// failed placement leaves the board untouched. On success the piece
    /// lands at the column's fill level, the fill level advances by one, and
    /// the post-placement position is scanned for a winning run through the
    /// new piece.
    pub fn place_piece(&mut self, column: usize, color: Player) -> Result<PlacementOutcome, MoveError> {
        if column >= self.width() {
            return Err(MoveError::InvalidColumn(column));
        }
        let row = self.fill_levels[column];
        if row >= self.height() {
            return Err(MoveError::ColumnFull(column));
        }

        self.grid[row][column] = color.to_cell();
        self.fill_levels[column] += 1;

        if win::evaluate(&self.grid, &self.fill_levels, column, color.to_cell(), self.connect) {
            Ok(PlacementOutcome::Win)
        } else if self.is_full() {
            Ok(PlacementOutcome::BoardFull)
        } else {
            Ok(PlacementOutcome::NoWin)
        }
    }

    /// Render the board as text: top row first, one character per cell,
    /// rows separated by newlines. Diagnostic output only.
    pub fn render(&self) -> String {
        self.grid
            .iter()
            .rev()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
