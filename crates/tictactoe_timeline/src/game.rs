//! Game state with time travel.
//!
//! `GameState` owns the full move history and a cursor into it. Only two
//! transitions change it: [`GameState::play_move`] and
//! [`GameState::jump_to`]. Everything else is a query or a thin wrapper
//! around those two.

use super::action::{InvalidTimeline, JumpError, MoveOutcome};
use super::contracts::{Contract, JumpContract, PlayMoveContract};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::snapshot::Snapshot;
use super::types::{GameStatus, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// History of snapshots plus the index of the one being displayed.
///
/// `history[0]` is always the empty board with X to move and
/// `cursor < history.len()` always holds. Deserialization checks every
/// timeline invariant and fails with [`InvalidTimeline`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) cursor: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Snapshot>,
    cursor: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidTimeline;

    fn try_from(raw: RawGameState) -> Result<Self, InvalidTimeline> {
        let game = Self {
            history: raw.history,
            cursor: raw.cursor,
        };
        TimelineInvariants::check_all(&game).map_err(|violations| {
            warn!(count = violations.len(), "Rejected invalid game state");
            InvalidTimeline { violations }
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game: one empty snapshot, cursor at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            cursor: 0,
        }
    }

    /// Builds a game by playing `moves` in order from the start.
    ///
    /// Rejected moves are skipped; the outcome of every attempt is returned
    /// alongside the final state.
    #[instrument(skip(moves))]
    pub fn replay<I>(moves: I) -> (Self, Vec<MoveOutcome>)
    where
        I: IntoIterator<Item = Position>,
    {
        let mut game = Self::new();
        let outcomes: Vec<_> = moves.into_iter().map(|pos| game.play_move(pos)).collect();
        debug!(
            attempted = outcomes.len(),
            played = game.move_count(),
            "Replayed moves"
        );
        (game, outcomes)
    }

    /// Discards all history and starts over.
    #[instrument(skip(self), fields(discarded = self.move_count()))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Marks `pos` for the player to move on the displayed snapshot.
    ///
    /// If the displayed board already has a winner or `pos` is taken, the
    /// state is left untouched and [`MoveOutcome::Rejected`] is returned.
    /// Otherwise any entries after the cursor are dropped, the new snapshot
    /// is appended and the cursor moves onto it.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn play_move(&mut self, pos: Position) -> MoveOutcome {
        if let Err(rejection) = PlayMoveContract::pre(self, &pos) {
            debug!(%rejection, "Move rejected");
            return MoveOutcome::Rejected(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let current = *self.current_snapshot();
        let player = current.next_player();

        let discarded = self.history.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Dropping future branch");
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(current.advance(pos));
        self.cursor = self.history.len() - 1;

        #[cfg(debug_assertions)]
        {
            let checked = PlayMoveContract::post(&before, self, &pos);
            debug_assert!(checked.is_ok(), "play_move postcondition failed: {checked:?}");
        }

        let outcome = MoveOutcome::Played {
            player,
            position: pos,
            step: self.cursor,
        };
        debug!(%outcome, "Move played");
        if let Some(winner) = self.winner() {
            info!(%winner, step = self.cursor, "Game won");
        }
        outcome
    }

    /// Moves the cursor to history entry `index`.
    ///
    /// History is not modified; later entries stay reachable until the next
    /// move is played from an earlier point.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `index >= history().len()`. The
    /// state is unchanged in that case.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if let Err(e) = JumpContract::pre(self, &index) {
            warn!(error = %e, "Jump rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.cursor = index;

        #[cfg(debug_assertions)]
        {
            let checked = JumpContract::post(&before, self, &index);
            debug_assert!(checked.is_ok(), "jump_to postcondition failed: {checked:?}");
        }

        debug!("Cursor moved");
        Ok(())
    }

    /// Moves the cursor one entry back. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        self.can_step_back() && self.jump_to(self.cursor - 1).is_ok()
    }

    /// Moves the cursor one entry forward. Returns false at the latest entry.
    pub fn step_forward(&mut self) -> bool {
        self.can_step_forward() && self.jump_to(self.cursor + 1).is_ok()
    }

    /// True if there is an earlier entry to go back to.
    pub fn can_step_back(&self) -> bool {
        self.cursor > 0
    }

    /// True if entries after the cursor are still available.
    pub fn can_step_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// The displayed snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of moves in the recorded history (`history().len() - 1`).
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// Player to move on the displayed snapshot.
    pub fn next_player(&self) -> Player {
        self.current_snapshot().next_player()
    }

    /// Winner on the displayed snapshot.
    pub fn winner(&self) -> Option<Player> {
        self.current_snapshot().winner()
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        self.current_snapshot().status()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
