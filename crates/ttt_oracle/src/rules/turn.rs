//! Turn order and move application.
//!
//! Search hot path: no `#[instrument]` spans in this module.

use super::super::{Board, Cell, IllegalMoveError, IllegalMoveKind, Move, Player};
use tracing::debug;

/// Returns the player whose turn it is.
///
/// X always moves first, so O is to move exactly when X has more marks.
/// The answer is only meaningful for boards where `count(X) - count(O)`
/// is 0 or 1.
pub fn active_player(board: &Board) -> Player {
    if board.count_marks(Player::X) > board.count_marks(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty cell in row-major order.
///
/// The order is fixed; the search's tie-break depends on it.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(mv, _)| mv)
        .collect()
}

/// Returns every board one move away, paired with the move that reaches
/// it, in [`legal_moves`] order.
pub fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    let mark = active_player(board).mark();
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .map(move |(mv, _)| (mv, board.with_cell(mv, mark)))
}

/// Returns a new board with the active player's mark placed at `mv`.
///
/// The input board is never modified.
///
/// # Errors
///
/// Returns [`IllegalMoveError`] when the target is off the board or
/// already occupied.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, IllegalMoveError> {
    let kind = match board.get(mv) {
        Some(Cell::Empty) => return Ok(board.with_cell(mv, active_player(board).mark())),
        Some(Cell::MarkX) => IllegalMoveKind::Occupied(Player::X),
        Some(Cell::MarkO) => IllegalMoveKind::Occupied(Player::O),
        None => IllegalMoveKind::OutOfBounds,
    };
    debug!(%mv, %kind, "Rejected move");
    Err(IllegalMoveError::new(mv, kind))
}
