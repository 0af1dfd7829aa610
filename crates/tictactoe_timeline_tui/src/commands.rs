//! Command dispatch.

use anyhow::{Context, Result};
use tictactoe_timeline::Position;
use tracing::instrument;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::logging::init_stderr_logging;
use crate::replay::{render_text, replay};
use crate::tui::run_tui;

/// Runs the parsed command line.
///
/// Only `play` reads the config file, so a broken config never blocks a
/// replay.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let config = AppConfig::load(cli.config.as_deref())?;
            run_tui(&config)
        }
        Command::Replay { moves, jump, json } => run_replay(&moves, jump, json),
    }
}

/// Replays moves and prints the report to stdout.
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_replay(moves: &[Position], jump: Option<usize>, json: bool) -> Result<()> {
    init_stderr_logging();

    let (game, report) = replay(moves, jump).context("Replay failed")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&game, &report));
    }
    Ok(())
}
