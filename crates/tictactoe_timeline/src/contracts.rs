//! Contract-based validation for the two game transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. Preconditions run on every call and decide whether
//! the transition happens at all. Postconditions run in debug builds and
//! catch a transition that corrupted the history.

use super::action::{JumpError, Rejection};
use super::game::GameState;
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::types::Cell;
use super::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Reason the precondition can fail.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the displayed board has no winner yet.
pub struct GameNotWon;

impl GameNotWon {
    /// Fails with [`Rejection::GameOver`] if somebody has won.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), Rejection> {
        match game.winner() {
            Some(winner) => Err(Rejection::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell on the displayed board is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`Rejection::Occupied`] if `pos` is taken.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), Rejection> {
        if game.current_snapshot().board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::Occupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for `play_move`.
///
/// Preconditions:
/// - No winner on the displayed board
/// - Target cell is empty
///
/// Postconditions:
/// - All timeline invariants hold
/// - Entries up to the old cursor are unchanged
/// - Exactly one entry follows them and the cursor points at it
/// - The new entry has the mover's mark at the target cell
pub struct PlayMoveContract;

impl Contract<GameState, Position> for PlayMoveContract {
    type Rejection = Rejection;

    fn pre(game: &GameState, pos: &Position) -> Result<(), Rejection> {
        GameNotWon::check(game)?;
        CellIsEmpty::check(*pos, game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState, pos: &Position) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match TimelineInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let kept = before.cursor() + 1;
        if after.history().len() != kept + 1 || after.cursor() != kept {
            violations.push(InvariantViolation::new(
                "History must be truncated at the cursor and grow by one entry",
            ));
        } else if after.history()[..kept] != before.history()[..kept] {
            violations.push(InvariantViolation::new("Entries before the new move must be unchanged"));
        }

        let mover = before.next_player();
        if after.current_snapshot().board().get(*pos) != Cell::Occupied(mover) {
            violations.push(InvariantViolation::new("New entry must carry the mover's mark"));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for `jump_to`.
///
/// Precondition: the index names an existing entry.
/// Postcondition: history is untouched and the cursor equals the index.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Rejection = JumpError;

    fn pre(game: &GameState, index: &usize) -> Result<(), JumpError> {
        let len = game.history().len();
        if *index < len {
            Ok(())
        } else {
            Err(JumpError::OutOfRange {
                requested: *index,
                len,
            })
        }
    }

    fn post(before: &GameState, after: &GameState, index: &usize) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if before.history() != after.history() {
            violations.push(InvariantViolation::new("Jumping must not modify history"));
        }
        if after.cursor() != *index {
            violations.push(InvariantViolation::new("Cursor must land on the requested entry"));
        }
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}
