//! Single step invariant: each entry adds exactly one mark to the previous board.

use super::super::{Cell, GameState, Position, Snapshot};
use super::Invariant;

/// Invariant: consecutive boards differ in exactly one cell.
///
/// That cell goes from empty to the mark of the player who was to move on
/// the earlier snapshot. Marks are never erased or overwritten.
pub struct SingleStepInvariant;

fn is_single_step(prev: &Snapshot, next: &Snapshot) -> bool {
    let mut changed = Position::ALL
        .iter()
        .filter(|pos| prev.board().get(**pos) != next.board().get(**pos));

    match (changed.next(), changed.next()) {
        (Some(&pos), None) => {
            prev.board().get(pos) == Cell::Empty
                && next.board().get(pos) == Cell::Occupied(prev.next_player())
        }
        _ => false,
    }
}

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .all(|pair| is_single_step(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player to move"
    }
}
