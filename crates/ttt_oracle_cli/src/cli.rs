//! Command-line interface for ttt-oracle.

use clap::{Parser, Subcommand, ValueEnum};
use ttt_oracle::Player;

/// ttt-oracle - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "ttt-oracle")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report everything the rules and the search know about a board
    Analyze {
        /// Board as 9 cells, row-major: X, O and '.' (e.g. "XX./OO./...")
        #[arg(short, long)]
        board: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the engine's move for a board as "row,col", or "none"
    BestMove {
        /// Board as 9 cells, row-major: X, O and '.' (e.g. "XX./OO./...")
        #[arg(short, long)]
        board: String,
    },

    /// Let the engine play both sides from the empty board
    SelfPlay,

    /// Play against the engine in the terminal
    Play {
        /// Symbol for the human player (X moves first). Overrides the config file.
        #[arg(short, long)]
        symbol: Option<Symbol>,

        /// Path to play settings
        #[arg(short, long, default_value = "ttt_oracle.toml")]
        config: std::path::PathBuf,
    },
}

/// Symbol choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Play X and move first
    X,
    /// Play O and move second
    O,
}

impl From<Symbol> for Player {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Player::X,
            Symbol::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["ttt-oracle", "play"]).unwrap();
        match cli.command {
            Command::Play { symbol, config } => {
                assert_eq!(symbol, None);
                assert_eq!(config, std::path::PathBuf::from("ttt_oracle.toml"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_symbol() {
        let cli = Cli::try_parse_from(["ttt-oracle", "play", "--symbol", "o"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Play {
                symbol: Some(Symbol::O),
                ..
            }
        ));
        assert!(Cli::try_parse_from(["ttt-oracle", "play", "--symbol", "z"]).is_err());
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["ttt-oracle", "analyze", "--board", "X........", "--json"])
            .unwrap();
        assert!(matches!(cli.command, Command::Analyze { json: true, .. }));
    }
}
