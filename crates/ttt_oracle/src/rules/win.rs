//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Player};

/// The 8 winning lines, in the order they are checked.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Returns the player owning the given line, if all three cells match.
pub fn line_owner(board: &Board, [a, b, c]: [Move; 3]) -> Option<Player> {
    let cell = board.get(a)?;
    if cell == board.get(b)? && cell == board.get(c)? {
        cell.player()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first completed line in [`LINES`] order,
/// `None` otherwise. A malformed board with lines for both players still
/// gets a deterministic answer.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XXO/X.O/..O")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonals() {
        assert_eq!(winner(&board("O.X/XO./X.O")), Some(Player::O));
        assert_eq!(winner(&board("OOX/.X./X..")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX./O.O/...")), None);
    }

    #[test]
    fn test_double_win_resolved_by_line_order() {
        // Only parallel lines can both be complete.
        assert_eq!(winner(&board("XXX/.../OOO")), Some(Player::X));
        assert_eq!(winner(&board("OOO/.../XXX")), Some(Player::O));
        assert_eq!(winner(&board("O.X/O.X/O.X")), Some(Player::O));
        assert_eq!(winner(&board("X.O/X.O/X.O")), Some(Player::X));
    }

    #[test]
    fn test_line_owner_ignores_empty_lines() {
        assert_eq!(line_owner(&Board::new(), LINES[0]), None);
    }
}
