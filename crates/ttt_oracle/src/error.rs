//! The rule-violation error.

use super::position::Move;
use super::types::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IllegalMoveKind {
    /// The target cell already holds a mark.
    #[display("occupied by {}", _0)]
    Occupied(Player),

    /// The target lies outside the 3x3 grid.
    #[display("off the board")]
    OutOfBounds,

    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameOver,
}

/// A move that cannot be applied to the board it was aimed at.
///
/// This is the only error the rules produce. It always points at a caller
/// problem (a stale board, a double click, bad input) and the board is
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IllegalMoveError {
    /// The rejected move.
    pub target: Move,
    /// Why it was rejected.
    pub kind: IllegalMoveKind,
}

impl IllegalMoveError {
    /// Creates a new illegal move error.
    pub fn new(target: Move, kind: IllegalMoveKind) -> Self {
        Self { target, kind }
    }
}

impl std::fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Illegal move {} ({}): {}",
            self.target,
            self.target.label(),
            self.kind
        )
    }
}

impl std::error::Error for IllegalMoveError {}
