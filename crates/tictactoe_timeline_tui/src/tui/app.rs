//! Application state and logic.
//!
//! `App` wraps a [`GameState`] with the bits only the terminal needs: the
//! board cursor, which pane has focus and the last message. It has no
//! terminal dependency, so every key path is testable.

use super::input::move_cursor;
use tictactoe_timeline::{GameState, MoveOutcome, Position};
use tracing::{debug, instrument};

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor or the move-list selection.
    Move(Direction),
    /// Play the cell under the cursor, or jump to the selected entry.
    Activate,
    /// Play a specific cell.
    PlayAt(Position),
    /// Switch between board and move list.
    ToggleFocus,
    /// Show the previous history entry.
    StepBack,
    /// Show the next history entry.
    StepForward,
    /// Start over.
    NewGame,
    /// Leave the application.
    Quit,
}

/// Pane receiving arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    Board,
    /// The move list.
    MoveList,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: "Player X starts. Arrows to move, Enter to play.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Last feedback message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    #[instrument(skip(self), fields(focus = ?self.focus, cursor = self.game.cursor()))]
    pub fn handle(&mut self, action: Action) {
        match (action, self.focus) {
            (Action::Move(direction), Focus::Board) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            (Action::Move(direction), Focus::MoveList) => self.select(direction),
            (Action::Activate, Focus::Board) => self.play(self.cursor),
            (Action::Activate, Focus::MoveList) => self.jump(self.selected),
            (Action::PlayAt(pos), _) => {
                self.cursor = pos;
                self.play(pos);
            }
            (Action::ToggleFocus, Focus::Board) => {
                self.focus = Focus::MoveList;
                self.selected = self.game.cursor();
            }
            (Action::ToggleFocus, Focus::MoveList) => self.focus = Focus::Board,
            (Action::StepBack, _) => {
                if self.game.step_back() {
                    self.after_jump();
                } else {
                    self.message = "Already at game start".to_string();
                }
            }
            (Action::StepForward, _) => {
                if self.game.step_forward() {
                    self.after_jump();
                } else {
                    self.message = "Already at the latest move".to_string();
                }
            }
            (Action::NewGame, _) => {
                self.game.reset();
                self.selected = 0;
                self.message = "New game. Player X starts.".to_string();
            }
            (Action::Quit, _) => self.should_quit = true,
        }
    }

    fn select(&mut self, direction: Direction) {
        let last = self.game.history().len() - 1;
        self.selected = match direction {
            Direction::Up | Direction::Left => self.selected.saturating_sub(1),
            Direction::Down | Direction::Right => (self.selected + 1).min(last),
        };
    }

    fn play(&mut self, pos: Position) {
        let outcome = self.game.play_move(pos);
        debug!(%outcome, "Move handled");
        self.message = match outcome {
            MoveOutcome::Played { player, position, .. } => format!("{player} played {position}"),
            MoveOutcome::Rejected(reason) => reason.to_string(),
        };
        self.selected = self.game.cursor();
    }

    fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => self.after_jump(),
            Err(e) => self.message = e.to_string(),
        }
    }

    fn after_jump(&mut self) {
        self.selected = self.game.cursor();
        self.message = match self.game.cursor() {
            0 => "Back at game start".to_string(),
            step => format!("Showing move #{step}"),
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
