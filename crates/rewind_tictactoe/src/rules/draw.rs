//! Full-board detection for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// Front ends use this to hint that no move is left; it does not change
/// the reported status.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
