//! Transition diffing between consecutive boards.

use super::super::{Board, Position};
use tracing::instrument;

/// Returns the first cell whose mark differs between the two boards.
///
/// Cells are scanned in index order. `None` means the boards are identical;
/// this never fails.
#[instrument(level = "trace")]
pub fn single_cell_diff(before: &Board, after: &Board) -> Option<Position> {
    Position::ALL
        .into_iter()
        .find(|pos| before.get(*pos) != after.get(*pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_center_move_is_found() {
        let before = Board::new();
        let after = before.with_mark(Position::Center, Player::X);
        assert_eq!(single_cell_diff(&before, &after), Some(Position::Center));
        assert_eq!(Position::Center.to_index(), 4);
    }

    #[test]
    fn test_identical_boards_have_no_diff() {
        let board = Board::new().with_mark(Position::TopLeft, Player::X);
        assert_eq!(single_cell_diff(&board, &board), None);
    }

    #[test]
    fn test_lowest_index_reported_first() {
        let before = Board::new();
        let after = before
            .with_mark(Position::BottomRight, Player::O)
            .with_mark(Position::TopCenter, Player::X);
        assert_eq!(single_cell_diff(&before, &after), Some(Position::TopCenter));
    }
}
