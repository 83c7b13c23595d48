//! Perfect-play tic-tac-toe.
//!
//! This crate answers every question a 3x3 tic-tac-toe front end needs
//! to ask about a position, and picks the game-theoretically optimal
//! reply for the side to move.
//!
//! # Architecture
//!
//! - **Types**: [`Cell`], [`Player`], [`Board`], [`Move`], [`Outcome`]
//! - **Rules**: pure queries over a board ([`active_player`], [`legal_moves`],
//!   [`apply_move`], [`successors`], [`winner`], [`is_terminal`], [`utility`])
//! - **Search**: exhaustive minimax ([`best_move`], [`evaluate`], [`search`])
//! - **Invariants**: composable well-formedness checks for caller-built boards
//! - **Game**: a value-passing session for presentation layers
//!
//! # Example
//!
//! ```
//! use ttt_oracle::{Board, Move, apply_move, best_move};
//!
//! let board = apply_move(&Board::new(), Move::new(0, 0))?;
//! let reply = best_move(&board).expect("game is not over");
//! let board = apply_move(&board, reply)?;
//! assert_eq!(board.marks(), 2);
//! # Ok::<(), ttt_oracle::IllegalMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod position;
mod rules;
mod search;
mod types;

pub mod invariants;

// Crate-level exports - Domain types
pub use board::{Board, BoardParseError};
pub use position::{Move, MoveParseError};
pub use types::{Cell, Outcome, Player};

// Crate-level exports - Errors
pub use error::{IllegalMoveError, IllegalMoveKind};

// Crate-level exports - Rules
pub use rules::{
    active_player, apply_move, is_full, is_terminal, legal_moves, outcome, successors, utility,
    winner,
};

// Crate-level exports - Search
pub use search::{Evaluation, best_move, evaluate, search};

// Crate-level exports - Session
pub use game::Game;
