//! tictactoe-timeline - play in the terminal or replay moves headlessly.

use anyhow::Result;
use clap::Parser;
use tictactoe_timeline_tui::{Cli, run};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    run(Cli::parse())
}
