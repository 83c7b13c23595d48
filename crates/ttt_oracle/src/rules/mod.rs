//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage so the
//! search can call them on hypothetical positions freely.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_full, is_terminal, outcome, utility};
pub use turn::{active_player, apply_move, legal_moves, successors};
pub use win::winner;
