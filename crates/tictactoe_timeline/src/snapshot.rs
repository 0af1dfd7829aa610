//! One entry of the move history.

use super::rules;
use super::types::{Board, GameStatus, Player};
use super::Position;
use serde::{Deserialize, Serialize};

/// The board after some move, plus whose turn it is.
///
/// Snapshots are never edited once recorded; a new move produces a new
/// snapshot from a copy of the previous board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    next_player: Player,
}

impl Snapshot {
    /// The empty board with X to move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            next_player: Player::X,
        }
    }

    /// Builds a snapshot from its parts.
    pub fn new(board: Board, next_player: Player) -> Self {
        Self { board, next_player }
    }

    /// Board as it stood after this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move from this snapshot.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Winner on this snapshot's board.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Snapshot reached by `next_player` marking `pos`.
    ///
    /// Does not validate the move; callers check the cell and the winner
    /// first.
    pub(crate) fn advance(&self, pos: Position) -> Self {
        Self {
            board: self.board.with_mark(pos, self.next_player),
            next_player: self.next_player.opponent(),
        }
    }

    /// Win, draw or still in play.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player,
            }
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
