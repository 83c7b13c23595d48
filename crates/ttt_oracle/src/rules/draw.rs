//! Terminal detection and scoring for tic-tac-toe.

use super::super::{Board, Cell, Outcome};
use super::win::winner;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.count(Cell::Empty) == 0
}

/// Checks if the game is over: somebody has won or no move remains.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board from X's perspective.
///
/// +1 when X has won, -1 when O has won, 0 otherwise. Callers must check
/// [`is_terminal`] first: an unfinished board scores 0 like a draw.
pub fn utility(board: &Board) -> i8 {
    winner(board).map_or(0, |player| player.win_value())
}

/// Classifies the board as won, drawn or still in progress.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Win(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_terminal(&Board::new()));
        assert_eq!(outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let drawn = board("XOX/OXX/OXO");
        assert!(is_full(&drawn));
        assert!(is_terminal(&drawn));
        assert_eq!(utility(&drawn), 0);
        assert_eq!(outcome(&drawn), Outcome::Draw);
    }

    #[test]
    fn test_win_is_terminal_before_full() {
        let won = board("XXX/OO./...");
        assert!(!is_full(&won));
        assert!(is_terminal(&won));
        assert_eq!(utility(&won), 1);
        assert_eq!(outcome(&won), Outcome::Win(Player::X));

        let lost = board("XX./OOO/X..");
        assert_eq!(utility(&lost), -1);
        assert_eq!(outcome(&lost), Outcome::Win(Player::O));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let won = board("XOX/OXO/OXX");
        assert!(is_full(&won));
        assert_eq!(outcome(&won), Outcome::Win(Player::X));
    }

    #[test]
    fn test_utility_on_unfinished_board_reports_draw_value() {
        assert_eq!(utility(&board("X../.O./...")), 0);
    }
}
