//! Cursor bounds invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: the cursor names an existing history entry.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing history entry"
    }
}
