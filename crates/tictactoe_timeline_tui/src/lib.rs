//! Terminal front end for `tictactoe_timeline`.
//!
//! - **cli**: argument parsing
//! - **commands**: dispatch of the parsed command
//! - **config**: optional TOML settings
//! - **tui**: interactive game with a move list for time travel
//! - **replay**: headless move replay with text or JSON output

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command, ParseMoveError};
pub use commands::run;
pub use config::{AppConfig, ConfigError};
pub use replay::{ReplayReport, render_text, replay};
