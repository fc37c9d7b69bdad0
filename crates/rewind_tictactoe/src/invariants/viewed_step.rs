//! Viewed step invariant: the viewed step names an existing entry.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `0 <= viewed_step < history.len()`.
pub struct ViewedStepInBoundsInvariant;

impl Invariant<GameEngine> for ViewedStepInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.viewed_step() < engine.history().len()
    }

    fn description() -> &'static str {
        "Viewed step is within history"
    }
}
