//! Single step invariant: each entry adds exactly one mark.

use super::super::{GameEngine, Move};
use super::Invariant;

/// Invariant: consecutive boards differ in exactly one cell, which goes
/// from empty to occupied.
pub struct SingleStepInvariant;

impl Invariant<GameEngine> for SingleStepInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            match Move::between(before, after) {
                Some(mv) => {
                    before.is_empty(mv.position)
                        && before.with_mark(mv.position, mv.player) == *after
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_played_game_holds() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 8] {
            engine.play(cell).expect("legal move");
        }
        assert!(SingleStepInvariant::holds(&engine));
    }

    #[test]
    fn test_repeated_board_violates() {
        let mut engine = GameEngine::new();
        engine.play(0).expect("legal move");
        let tail = *engine.history().tail().board();
        engine.history.push(tail);
        assert!(!SingleStepInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = GameEngine::new();
        engine.play(4).expect("legal move");
        let overwritten = engine.history().tail().board().with_mark(Position::Center, Player::O);
        engine.history.push(overwritten);
        assert!(!SingleStepInvariant::holds(&engine));
    }
}
