//! Move coordinates for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A move: the (row, column) of the cell the active player fills.
///
/// Coordinates are not range-checked on construction. A move outside
/// the 3x3 grid is representable so that callers can pass raw input
/// straight to [`apply_move`](crate::apply_move), which rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Move {
    /// All 9 in-range moves in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the row-major cell index, or `None` when out of range.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then(|| self.row * 3 + self.col)
    }

    /// Checks that both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Error returned when move text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move '{}': expected 'row,col' or a cell number 1-9", input)]
pub struct MoveParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses `row,col` (0-based) or a cell number `1`-`9` counted
    /// row-major from the top-left.
    ///
    /// Coordinates are not range-checked here, only cell numbers are.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoveParseError {
            input: s.to_string(),
        };
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row.parse::<usize>().map_err(|_| err())?;
                let col = col.parse::<usize>().map_err(|_| err())?;
                Ok(Move::new(row, col))
            }
            [number] => number
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(Move::from_index)
                .ok_or_else(err),
            _ => Err(err()),
        }
    }
}
