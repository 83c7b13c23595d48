//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use ttt_oracle::{Board, apply_move, is_terminal, legal_moves};

/// Every board reachable from the empty board by alternating legal play,
/// including terminal ones.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if is_terminal(&board) {
            continue;
        }
        for mv in legal_moves(&board) {
            stack.push(apply_move(&board, mv).expect("legal move must apply"));
        }
    }

    boards
}

/// Parses a board literal.
pub fn board(s: &str) -> Board {
    s.parse().expect("valid board literal")
}
