//! Text shown around the board: status line and move list.
//!
//! These strings are part of the game's observable behavior, so they live
//! next to the rules instead of in any particular renderer.

use super::game::GameState;
use super::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

/// Status line for a snapshot: `"Winner: X"` or `"Next player: O"`.
///
/// A full board without a winner still reports the next player.
pub fn status_text(snapshot: &Snapshot) -> String {
    match snapshot.winner() {
        Some(winner) => format!("Winner: {winner}"),
        None => format!("Next player: {}", snapshot.next_player()),
    }
}

/// Label of the move-list button for history entry `index`.
pub fn move_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{index}")
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Button label.
    pub label: String,
    /// True for the entry under the cursor.
    pub is_current: bool,
}

/// Move list for the whole history, oldest first.
pub fn move_list(game: &GameState) -> Vec<MoveListEntry> {
    (0..game.history().len())
        .map(|index| MoveListEntry {
            index,
            label: move_label(index),
            is_current: index == game.cursor(),
        })
        .collect()
}
