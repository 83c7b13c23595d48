//! Interactive human-versus-engine play over any line-based terminal.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{info, instrument, warn};
use ttt_oracle::{Game, Move, Outcome, Player};

/// Plays one game, reading the human's moves from `input`.
///
/// Returns the final outcome, or [`Outcome::InProgress`] when the human
/// quits early.
#[instrument(skip(input, out))]
pub fn play(
    input: &mut impl BufRead,
    out: &mut impl Write,
    human: Player,
    engine_delay: Duration,
) -> Result<Outcome> {
    let mut game = Game::new();
    writeln!(out, "You play {}. X moves first.", human)?;
    info!(%human, "Game started");

    while let Some(to_move) = game.to_move() {
        writeln!(out, "\n{}\n", game.board().display())?;

        if to_move != human {
            std::thread::sleep(engine_delay);
            if let Some((mv, _)) = game.play_engine() {
                writeln!(out, "Engine plays {} ({})", mv, mv.label())?;
            }
            continue;
        }

        write!(out, "Your move (row,col or 1-9, q to quit): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game ended");
        }
        let line = line.trim();
        if matches!(line, "q" | "quit") {
            info!("Human quit");
            writeln!(out, "Bye.")?;
            return Ok(Outcome::InProgress);
        }

        let mv: Move = match line.parse() {
            Ok(mv) => mv,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        if let Err(e) = game.play(mv) {
            warn!(error = %e, "Rejected human move");
            writeln!(out, "{}", e)?;
        }
    }

    let outcome = game.outcome();
    writeln!(out, "\n{}\n", game.board().display())?;
    match outcome.winner() {
        Some(winner) if winner == human => writeln!(out, "You win!")?,
        Some(_) => writeln!(out, "The engine wins.")?,
        None => writeln!(out, "Draw.")?,
    }
    Ok(outcome)
}
