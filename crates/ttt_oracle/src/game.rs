//! A value-passing game session for presentation layers.
//!
//! A front end owns one [`Game`], forwards human moves to [`Game::play`],
//! asks for the engine's reply with [`Game::play_engine`], and re-reads
//! [`Game::outcome`] after each step to update its display.

use super::rules::{active_player, apply_move, outcome};
use super::search::best_move;
use super::{Board, IllegalMoveError, IllegalMoveKind, Move, Outcome, Player};
use tracing::{error, info, instrument};

/// Tic-tac-toe game session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues a game from an existing position.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Replays moves from the empty board.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, IllegalMoveError> {
        let mut game = Self::new();
        for &mv in moves {
            game.play(mv)?;
        }
        Ok(game)
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played in this session, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current status.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        (!self.outcome().is_over()).then(|| active_player(&self.board))
    }

    /// Plays a move for the active player.
    ///
    /// On error the game is unchanged.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn play(&mut self, mv: Move) -> Result<Outcome, IllegalMoveError> {
        if self.outcome().is_over() {
            return Err(IllegalMoveError::new(mv, IllegalMoveKind::GameOver));
        }

        let player = active_player(&self.board);
        self.board = apply_move(&self.board, mv)?;
        self.history.push(mv);

        let outcome = self.outcome();
        info!(%player, %mv, %outcome, "Move played");
        Ok(outcome)
    }

    /// Lets the engine choose and play the active player's move.
    ///
    /// Returns `None` when the game is already over.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn play_engine(&mut self) -> Option<(Move, Outcome)> {
        let mv = best_move(&self.board)?;
        // `best_move` answers only for live boards and picks an empty cell,
        // so `play` accepts it.
        match self.play(mv) {
            Ok(outcome) => Some((mv, outcome)),
            Err(err) => {
                error!(%err, "Engine move rejected");
                None
            }
        }
    }
}
