//! Frozen after win invariant: nothing is recorded after a winning board.

use super::super::GameState;
use super::Invariant;

/// Invariant: only the last history entry may have a winner.
pub struct FrozenAfterWinInvariant;

impl Invariant<GameState> for FrozenAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history[..history.len().saturating_sub(1)]
            .iter()
            .all(|snapshot| snapshot.winner().is_none())
    }

    fn description() -> &'static str {
        "No move follows a winning board"
    }
}
