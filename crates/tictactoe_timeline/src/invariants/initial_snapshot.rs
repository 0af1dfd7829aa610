//! Initial snapshot invariant: every game starts from the empty board.

use super::super::{GameState, Snapshot};
use super::Invariant;

/// Invariant: `history[0]` is the empty board with X to move.
pub struct InitialSnapshotInvariant;

impl Invariant<GameState> for InitialSnapshotInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first() == Some(&Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty board and X to move"
    }
}
