//! The 3x3 board value.

use super::position::Move;
use super::types::{Cell, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Boards are plain `Copy` values. Rules never modify a board in place;
/// they hand back a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from rows, top row first.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given move, or `None` when off the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Sets the cell at the given move.
    ///
    /// This is a construction helper for callers building positions; game
    /// play goes through [`apply_move`](crate::apply_move).
    pub fn set(&mut self, mv: Move, cell: Cell) -> Result<(), &'static str> {
        let slot = self
            .cells
            .get_mut(mv.row)
            .and_then(|row| row.get_mut(mv.col))
            .ok_or("Position out of bounds")?;
        *slot = cell;
        Ok(())
    }

    /// Returns a copy with `cell` written at `mv`.
    ///
    /// `mv` must be on the board; callers check with [`Board::get`] first.
    pub(crate) fn with_cell(&self, mv: Move, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[mv.row][mv.col] = cell;
        next
    }

    /// Checks if the cell at the given move is empty. Off-board cells are not.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Iterates over every cell in row-major order with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::ALL.iter().map(|&mv| (mv, self.cells[mv.row][mv.col]))
    }

    /// Counts cells holding the given value.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Counts marks of the given player.
    pub fn count_marks(&self, player: Player) -> usize {
        self.count(player.mark())
    }

    /// Number of occupied cells.
    pub fn marks(&self) -> usize {
        9 - self.count(Cell::Empty)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their cell number (1-9) so a player can pick them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => char::from(b'1' + (row * 3 + col) as u8),
                    marked => marked.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Compact text form: three rows of `X`, `O` and `.` joined by `/`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error returned when board text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character that is not a mark, an empty marker or a separator.
    #[display("Unexpected character '{}' in board", _0)]
    InvalidCharacter(char),

    /// The text did not describe exactly nine cells.
    #[display("Board must have exactly 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `-` and `_` are empty. Whitespace,
    /// `/` and `|` are ignored so `"XX./OO./..."` and `"XX. OO. ..."` both work.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let cell = match c {
                'X' | 'x' => Cell::MarkX,
                'O' | 'o' => Cell::MarkO,
                '.' | '-' | '_' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(BoardParseError::InvalidCharacter(other)),
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut rows = [[Cell::Empty; 3]; 3];
        for (mv, cell) in Move::ALL.iter().zip(cells) {
            rows[mv.row][mv.col] = cell;
        }
        Ok(Board::from_rows(rows))
    }
}
