//! No moves past a win: a won board is always the tail.

use super::super::rules::terminal_mark;
use super::super::GameEngine;
use super::Invariant;

/// Invariant: only the tail entry may hold a complete line.
pub struct NoMovesPastWinInvariant;

impl Invariant<GameEngine> for NoMovesPastWinInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let entries = engine.history().entries();
        let before_tail = &entries[..entries.len().saturating_sub(1)];
        before_tail
            .iter()
            .all(|entry| terminal_mark(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No entry follows a won board"
    }
}
