//! Single winner invariant: at most one player owns a completed line.

use super::Invariant;
use crate::Board;
use crate::rules::win::{LINES, line_owner};

/// Invariant: completed lines, if any, all belong to the same player.
///
/// Play stops at the first completed line, so a board where both players
/// have one cannot be reached.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut owners = LINES.into_iter().filter_map(|line| line_owner(board, line));
        match owners.next() {
            Some(first) => owners.all(|owner| owner == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player has completed a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds(s: &str) -> bool {
        SingleWinnerInvariant::holds(&s.parse().unwrap())
    }

    #[test]
    fn test_no_winner_holds() {
        assert!(holds("........."));
        assert!(holds("XOX/OXX/OXO"));
    }

    #[test]
    fn test_single_winner_with_two_lines_holds() {
        // X completes a row and a column with the same final move.
        assert!(holds("XXX/XO./XOO"));
    }

    #[test]
    fn test_both_players_winning_violates() {
        assert!(!holds("XXX/.../OOO"));
        assert!(!holds("XO./XO./XO."));
    }
}
