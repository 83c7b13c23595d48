//! Mark balance invariant: X is never behind O, and never more than one ahead.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// This is what makes [`active_player`](crate::active_player) meaningful.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count_marks(Player::X);
        let o = board.count_marks(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
