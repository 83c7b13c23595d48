//! One-shot commands: analysis, engine move, self-play.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};
use ttt_oracle::{
    Board, Game, Move, Outcome, Player, active_player, is_terminal, legal_moves, search, utility,
    winner,
};

/// Parses a board from the command line and checks it is well formed.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Could not read board '{}'", text))?;

    if let Err(violations) = board.validate() {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Board '{}' cannot arise in play: {}", board, descriptions);
    }

    Ok(board)
}

/// Everything known about one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Board in compact text form.
    pub board: String,
    /// Player to move (meaningful only when the game is not over).
    pub active_player: Player,
    /// Empty cells in row-major order.
    pub legal_moves: Vec<Move>,
    /// Winner, if any.
    pub winner: Option<Player>,
    /// Whether the game is over.
    pub terminal: bool,
    /// Final score from X's perspective, present only for terminal boards.
    pub utility: Option<i8>,
    /// Minimax value from X's perspective.
    pub value: i8,
    /// The engine's move.
    pub best_move: Option<Move>,
    /// Positions the search visited.
    pub nodes: u64,
}

impl AnalysisReport {
    /// Builds the report for a board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn new(board: &Board) -> Self {
        let terminal = is_terminal(board);
        let evaluation = search(board);
        Self {
            board: board.to_string(),
            active_player: active_player(board),
            legal_moves: legal_moves(board),
            winner: winner(board),
            terminal,
            utility: terminal.then(|| utility(board)),
            value: evaluation.value,
            best_move: evaluation.best_move,
            nodes: evaluation.nodes,
        }
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let moves = self
            .legal_moves
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let moves = if moves.is_empty() {
            "-".to_string()
        } else {
            moves
        };
        writeln!(f, "board:         {}", self.board)?;
        writeln!(f, "to move:       {}", self.active_player)?;
        writeln!(f, "legal moves:   {}", moves)?;
        match self.winner {
            Some(player) => writeln!(f, "winner:        {}", player)?,
            None => writeln!(f, "winner:        -")?,
        }
        writeln!(f, "terminal:      {}", self.terminal)?;
        if let Some(utility) = self.utility {
            writeln!(f, "utility:       {}", utility)?;
        }
        writeln!(f, "value:         {}", self.value)?;
        match self.best_move {
            Some(mv) => writeln!(f, "best move:     {} ({})", mv, mv.label())?,
            None => writeln!(f, "best move:     none")?,
        }
        write!(f, "nodes:         {}", self.nodes)
    }
}

/// Runs `analyze`.
#[instrument(skip(out))]
pub fn analyze(board: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let board = parse_board(board)?;
    let report = AnalysisReport::new(&board);
    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report)?;
    }
    Ok(())
}

/// Runs `best-move`.
#[instrument(skip(out))]
pub fn best_move(board: &str, out: &mut impl Write) -> Result<()> {
    let board = parse_board(board)?;
    match ttt_oracle::best_move(&board) {
        Some(mv) => writeln!(out, "{}", mv)?,
        None => writeln!(out, "none")?,
    }
    Ok(())
}

/// Runs `self-play` and returns the final outcome.
#[instrument(skip(out))]
pub fn self_play(out: &mut impl Write) -> Result<Outcome> {
    let mut game = Game::new();
    writeln!(out, "{}\n", game.board().display())?;

    while let Some(player) = game.to_move() {
        let Some((mv, _)) = game.play_engine() else {
            break;
        };
        writeln!(out, "{} plays {} ({})", player, mv, mv.label())?;
        writeln!(out, "{}\n", game.board().display())?;
    }

    let outcome = game.outcome();
    info!(%outcome, moves = game.history().len(), "Self-play finished");
    writeln!(out, "{}", outcome)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_board_rejects_malformed() {
        assert!(parse_board("XX./OO./..").is_err());
        assert!(parse_board("OO./.../...").is_err());
        let err = parse_board("XXX/.../OOO").unwrap_err();
        assert!(err.to_string().contains("cannot arise in play"));
    }

    #[test]
    fn test_report_for_open_position() {
        let board = parse_board("XX./OO./...").unwrap();
        let report = AnalysisReport::new(&board);
        assert_eq!(report.active_player, Player::X);
        assert_eq!(report.legal_moves.len(), 5);
        assert_eq!(report.winner, None);
        assert!(!report.terminal);
        assert_eq!(report.utility, None);
        assert_eq!(report.value, 1);
        assert_eq!(report.best_move, Some(Move::new(0, 2)));
    }

    #[test]
    fn test_report_for_finished_position() {
        let board = parse_board("XXX/OO./...").unwrap();
        let report = AnalysisReport::new(&board);
        assert!(report.terminal);
        assert_eq!(report.winner, Some(Player::X));
        assert_eq!(report.utility, Some(1));
        assert_eq!(report.best_move, None);
    }

    #[test]
    fn test_best_move_output() {
        assert_eq!(run(|out| best_move("XX./OO./...", out)), "0,2\n");
        assert_eq!(run(|out| best_move("XXX/OO./...", out)), "none\n");
    }

    #[test]
    fn test_analyze_json_output() {
        let text = run(|out| analyze("XX./OO./...", true, out));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["active_player"], "X");
        assert_eq!(json["best_move"]["col"], 2);
        assert_eq!(json["terminal"], false);
    }

    #[test]
    fn test_analyze_text_output() {
        let text = run(|out| analyze("XX./OO./...", false, out));
        assert!(text.contains("best move:     0,2 (Top-right)"));
        assert!(text.contains("to move:       X"));
    }

    #[test]
    fn test_self_play_draws() {
        let mut out = Vec::new();
        assert_eq!(self_play(&mut out).unwrap(), Outcome::Draw);
        let text = String::from_utf8(out).unwrap();
        assert!(text.trim_end().ends_with("Draw"));
        assert_eq!(text.matches(" plays ").count(), 9);
    }
}
