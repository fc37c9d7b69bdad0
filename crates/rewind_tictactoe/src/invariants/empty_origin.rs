//! Empty origin invariant: history starts from the empty board.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: `history[0]` is the empty board.
pub struct EmptyOriginInvariant;

impl Invariant<GameEngine> for EmptyOriginInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .get(0)
            .is_some_and(|entry| *entry.board() == Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
