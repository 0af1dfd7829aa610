//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked by the contracts in debug builds and can be
//! tested on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants, so a set is just a type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Err` with one violation per failing invariant.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod alternating_turn;
pub mod cursor_in_bounds;
pub mod frozen_after_win;
pub mod initial_snapshot;
pub mod single_step;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use frozen_after_win::FrozenAfterWinInvariant;
pub use initial_snapshot::InitialSnapshotInvariant;
pub use single_step::SingleStepInvariant;

/// Every invariant of a `GameState`.
pub type TimelineInvariants = (
    InitialSnapshotInvariant,
    SingleStepInvariant,
    AlternatingTurnInvariant,
    FrozenAfterWinInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TimelineInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let (mut game, _) = GameState::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
        ]);
        game.jump_to(1).expect("in range");
        assert!(TimelineInvariants::check_all(&game).is_ok());
        game.play_move(Position::BottomRight);
        assert!(TimelineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = GameState::new();
        game.play_move(Position::Center);
        game.cursor = 5;
        game.history[0] = game.history[1];

        let violations = TimelineInvariants::check_all(&game).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&InitialSnapshotInvariant::description()));
        assert!(descriptions.contains(&CursorInBoundsInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (InitialSnapshotInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
