//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: the mark placed going from step `k` to `k + 1` is X when
/// `k` is even and O when `k` is odd.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .moves()
            .enumerate()
            .all(|(k, mv)| mv.is_some_and(|mv| mv.player == Player::to_move_at(k)))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
