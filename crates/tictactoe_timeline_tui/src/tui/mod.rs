//! Terminal UI: terminal lifecycle and the event loop.
//!
//! All game logic lives in [`App`]; this module only turns key presses
//! into [`app::Action`]s and redraws.

pub mod app;
pub mod input;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub use app::App;

use crate::config::AppConfig;
use crate::logging::init_file_logging;

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    init_file_logging(config)?;
    info!("Starting tictactoe-timeline TUI");

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let guard = TerminalGuard;

    let res = run_app(&mut terminal, config);

    drop(guard);
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Raw mode plus alternate screen. Undoes raw mode if a later step fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(io::stdout()))
    };
    setup().or_else(|e| {
        let _ = restore_terminal();
        Err(e).context("Failed to set up terminal")
    })
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Safe to call when setup never happened.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Restores the terminal when dropped, including during unwinding.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Restores the terminal before the default hook prints the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &AppConfig) -> Result<()> {
    let tick = Duration::from_millis(*config.tick_rate_ms());
    let mut app = App::new();

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app, config))?;

        if !event::poll(tick)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match input::map_key(key) {
                Some(action) => app.handle(action),
                None => debug!(code = ?key.code, "Unbound key"),
            }
        }
    }
    Ok(())
}
