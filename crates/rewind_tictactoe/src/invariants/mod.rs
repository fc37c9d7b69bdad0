//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every command.
//! They are testable independently and the `play` postcondition checks
//! all of them in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implemented for tuples of up to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
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
                        tracing::warn!(invariant = $inv::description(), "Invariant violated");
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
pub mod empty_origin;
pub mod no_moves_past_win;
pub mod single_step;
pub mod viewed_step;

pub use alternating_turn::AlternatingTurnInvariant;
pub use empty_origin::EmptyOriginInvariant;
pub use no_moves_past_win::NoMovesPastWinInvariant;
pub use single_step::SingleStepInvariant;
pub use viewed_step::ViewedStepInBoundsInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    EmptyOriginInvariant,
    SingleStepInvariant,
    AlternatingTurnInvariant,
    ViewedStepInBoundsInvariant,
    NoMovesPastWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameEngine, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut engine = GameEngine::new();
        for cell in [4, 0, 8, 2] {
            engine.play(cell).expect("legal move");
        }
        engine.jump_to(1).expect("step exists");
        engine.play(6).expect("legal move");
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new();
        engine.history.push(
            Board::new()
                .with_mark(Position::TopLeft, Player::O)
                .with_mark(Position::Center, Player::O),
        );
        engine.viewed_step = 5;

        let violations = EngineInvariants::check_all(&engine).expect_err("corrupted engine");
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();
        type TwoInvariants = (EmptyOriginInvariant, ViewedStepInBoundsInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
