//! Command-line interface for tictactoe-timeline.

use clap::{Parser, Subcommand};
use derive_more::{Display, Error};
use std::path::PathBuf;
use tictactoe_timeline::Position;

/// Tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe-timeline")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Moves in order: board index 0-8 or a label such as `center` or `top-left`
        #[arg(required = true, value_parser = parse_position)]
        moves: Vec<Position>,

        /// Move the cursor to this history entry after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

/// A move argument that names no board position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("'{}' is not a board position (use 0-8 or a label like 'center')", input)]
pub struct ParseMoveError {
    /// The rejected argument.
    pub input: String,
}

/// Parses a CLI move argument.
pub fn parse_position(s: &str) -> Result<Position, ParseMoveError> {
    Position::from_label_or_number(s).ok_or_else(|| ParseMoveError {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe-timeline"]).expect("parses");
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_accepts_indices_and_labels() {
        let cli = Cli::try_parse_from([
            "tictactoe-timeline",
            "replay",
            "0",
            "center",
            "top-right",
            "--jump",
            "1",
            "--json",
        ])
        .expect("parses");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![Position::TopLeft, Position::Center, Position::TopRight],
                jump: Some(1),
                json: true,
            })
        );
    }

    #[test]
    fn test_replay_rejects_unknown_position() {
        assert!(Cli::try_parse_from(["tictactoe-timeline", "replay", "9"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe-timeline", "replay", "middle"]).is_err());
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe-timeline", "replay"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["tictactoe-timeline", "play", "--config", "game.toml"])
            .expect("parses");
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.command, Some(Command::Play));
    }
}
