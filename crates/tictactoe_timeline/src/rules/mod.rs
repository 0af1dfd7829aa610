//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). They know nothing
//! about history or the cursor, so they can be reused by the game state,
//! the invariants and the renderers alike.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};
