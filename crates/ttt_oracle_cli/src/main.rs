//! ttt-oracle - perfect-play tic-tac-toe from the command line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Analyze { board, json } => commands::analyze(&board, json, &mut stdout),
        Command::BestMove { board } => commands::best_move(&board, &mut stdout),
        Command::SelfPlay => commands::self_play(&mut stdout).map(|_| ()),
        Command::Play { symbol, config } => run_play(symbol.map(Into::into), &config, &mut stdout),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config_path, out), fields(config_path = %config_path.display()))]
fn run_play(
    symbol: Option<ttt_oracle::Player>,
    config_path: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let config = PlayConfig::load_or_default(config_path)?;
    let human = symbol.unwrap_or(*config.default_symbol());
    info!(%human, delay_ms = config.engine_delay_ms(), "Starting interactive game");

    let mut input = std::io::stdin().lock();
    play::play(&mut input, out, human, config.engine_delay())?;
    Ok(())
}

/// Logs go to stderr so stdout stays clean for piping. Quiet unless
/// `RUST_LOG` asks for more.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
