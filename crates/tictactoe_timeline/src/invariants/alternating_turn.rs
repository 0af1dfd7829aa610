//! Alternating turn invariant: X is to move on even entries, O on odd ones.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `history[i].next_player()` is X iff `i` is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .all(|(step, snapshot)| snapshot.next_player() == Player::for_step(step))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
