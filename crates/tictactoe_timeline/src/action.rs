//! Results of the two game transitions.
//!
//! A rejected move is an ordinary outcome, not an error: clicking an
//! occupied square or playing on after a win simply does nothing.

use super::invariants::InvariantViolation;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// What happened when a move was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The move was recorded as history entry `step`.
    #[display("{player} -> {position} (move #{step})")]
    Played {
        /// Player who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
        /// Index of the new history entry.
        step: usize,
    },
    /// Nothing changed.
    #[display("rejected: {_0}")]
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_played(&self) -> bool {
        matches!(self, MoveOutcome::Played { .. })
    }
}

/// Why a move was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The displayed board already has a winner.
    #[display("Player {_0} has already won")]
    GameOver(Player),
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
}

/// Error returned by `jump_to` for an index past the end of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested step does not exist.
    #[display("No history entry {requested} (history has {len} entries)")]
    OutOfRange {
        /// Step that was asked for.
        requested: usize,
        /// Current history length.
        len: usize,
    },
}

/// A game state that breaks one or more timeline invariants.
///
/// Returned when deserializing a `GameState` whose history or cursor could
/// not have been produced by playing moves.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game timeline: {}", join_violations(violations))]
pub struct InvalidTimeline {
    /// Every invariant that failed.
    #[error(not(source))]
    pub violations: Vec<InvariantViolation>,
}

fn join_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
