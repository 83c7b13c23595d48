//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. The tree is small enough
//! (under 550k positions from the empty board) that every line is
//! searched to the end with no heuristic evaluation and no depth limit.

use super::rules::{active_player, is_terminal, successors, utility};
use super::{Board, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Minimax value from X's perspective: +1, 0 or -1.
    pub value: i8,
    /// The chosen move, `None` on a terminal board.
    pub best_move: Option<Move>,
    /// Positions visited, including the root.
    pub nodes: u64,
}

/// Searches the board and returns its value and the optimal move.
///
/// Among moves reaching the best value, the first in
/// [`legal_moves`](crate::legal_moves) order (row-major) is chosen.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board) -> Evaluation {
    let mut nodes = 0;
    let (value, best_move) = minimax(board, &mut nodes);
    debug!(value, ?best_move, nodes, "Search complete");
    Evaluation {
        value,
        best_move,
        nodes,
    }
}

/// Returns the optimal move for the active player, or `None` when the
/// game is already over.
pub fn best_move(board: &Board) -> Option<Move> {
    if is_terminal(board) {
        return None;
    }
    search(board).best_move
}

/// Returns the minimax value of the board from X's perspective.
///
/// Terminal boards evaluate to their [`utility`].
pub fn evaluate(board: &Board) -> i8 {
    search(board).value
}

/// Backs up the value of `board` under optimal play by both sides.
///
/// A side stops at its first forced win. Later moves could at most tie
/// it and the tie-break keeps the first, so both the value and the move
/// match a full search.
fn minimax(board: &Board, nodes: &mut u64) -> (i8, Option<Move>) {
    *nodes += 1;

    if is_terminal(board) {
        return (utility(board), None);
    }

    let player = active_player(board);
    let target = player.win_value();
    // Worse than any reachable value for `player`.
    let mut best_value = -2 * target;
    let mut best_move = None;

    for (mv, next) in successors(board) {
        let (value, _) = minimax(&next, nodes);

        let improves = match player {
            Player::X => value > best_value,
            Player::O => value < best_value,
        };
        if improves {
            best_value = value;
            best_move = Some(mv);
        }
        if best_value == target {
            break;
        }
    }

    (best_value, best_move)
}
