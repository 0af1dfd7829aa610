//! Tic-tac-toe with a time-travel move history.
//!
//! The game is an explicit state value, [`GameState`], holding every
//! [`Snapshot`] since the start plus a cursor naming the one on screen.
//! Two transitions change it:
//!
//! - [`GameState::play_move`] marks a cell for the player to move. Entries
//!   after the cursor are dropped first, so playing from an earlier point
//!   starts a new branch. Moves onto an occupied cell or after a win are
//!   rejected without touching the state.
//! - [`GameState::jump_to`] moves the cursor without touching history.
//!
//! Win detection ([`check_winner`]) is a pure function of a [`Board`].
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Player, Position, check_winner, status_text};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     game.play_move(pos);
//! }
//! assert_eq!(check_winner(game.current_snapshot().board()), Some(Player::X));
//! assert_eq!(status_text(game.current_snapshot()), "Winner: X");
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(status_text(game.current_snapshot()), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod presentation;
mod snapshot;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{InvalidTimeline, JumpError, MoveOutcome, Rejection};
pub use game::GameState;
pub use position::Position;
pub use presentation::{MoveListEntry, move_label, move_list, status_text};
pub use rules::{Line, check_winner, is_draw, is_full, winning_line};
pub use snapshot::Snapshot;
pub use types::{Board, Cell, GameStatus, Player};
