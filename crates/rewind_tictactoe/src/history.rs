//! Board snapshot history and its display descriptions.
//!
//! History is append-only except for branching: resuming play from an
//! earlier step truncates everything after it before the new move lands.
//! Index 0 always holds the empty board.

use super::action::Move;
use super::rules::single_cell_diff;
use super::types::{Board, HistoryOrder};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, instrument};

/// Label of the first history entry.
pub const GAME_START_LABEL: &str = "Go to game start";

/// One snapshot in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    /// Wraps a board snapshot.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Ordered board snapshots from game start along the line being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Board::new())],
        }
    }

    /// Number of entries (always at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries. Never true for engine history.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Returns all entries in creation order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the latest entry.
    pub fn tail_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns the latest entry.
    pub fn tail(&self) -> &HistoryEntry {
        &self.entries[self.tail_step()]
    }

    /// Moves along the history, one per transition.
    ///
    /// Item `k` is the move from step `k` to step `k + 1`.
    pub fn moves(&self) -> impl Iterator<Item = Option<Move>> + '_ {
        self.entries
            .windows(2)
            .map(|pair| Move::between(pair[0].board(), pair[1].board()))
    }

    /// Appends a new snapshot.
    pub(crate) fn push(&mut self, board: Board) {
        self.entries.push(HistoryEntry::new(board));
    }

    /// Drops every entry after `step`, returning how many were dropped.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) -> usize {
        let keep = step + 1;
        let dropped = self.entries.len().saturating_sub(keep);
        if dropped > 0 {
            debug!(dropped, "Discarding future entries");
            self.entries.truncate(keep);
        }
        dropped
    }

    /// Label for the entry at `step`.
    ///
    /// Step 0 reads "Go to game start"; later steps name the move number
    /// and the (column, row) of the cell it filled.
    pub fn label(&self, step: usize) -> String {
        if step == 0 {
            return GAME_START_LABEL.to_string();
        }
        let diff = match (self.entries.get(step - 1), self.entries.get(step)) {
            (Some(before), Some(after)) => single_cell_diff(before.board(), after.board()),
            _ => None,
        };
        match diff {
            Some(pos) => format!("Go to move #{}({}, {})", step, pos.column(), pos.row()),
            // Unreachable for engine-built history: consecutive entries always differ.
            None => format!("Go to move #{}(-1, -1)", step),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Display row for one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescription {
    /// History index this row jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// True when this is the viewed step.
    pub is_current: bool,
}

/// Lazy sequence of [`MoveDescription`]s in display order.
///
/// Built fresh by each call to
/// [`GameEngine::history_descriptions`](crate::GameEngine::history_descriptions);
/// labels are derived on demand from the board snapshots.
#[derive(Debug, Clone)]
pub struct HistoryDescriptions<'a> {
    history: &'a History,
    viewed_step: usize,
    order: HistoryOrder,
    steps: Range<usize>,
}

impl<'a> HistoryDescriptions<'a> {
    pub(crate) fn new(history: &'a History, viewed_step: usize, order: HistoryOrder) -> Self {
        Self {
            history,
            viewed_step,
            order,
            steps: 0..history.len(),
        }
    }

    fn describe(&self, step: usize) -> MoveDescription {
        MoveDescription {
            step,
            label: self.history.label(step),
            is_current: step == self.viewed_step,
        }
    }
}

impl Iterator for HistoryDescriptions<'_> {
    type Item = MoveDescription;

    fn next(&mut self) -> Option<Self::Item> {
        let step = if self.order.is_ascending() {
            self.steps.next()?
        } else {
            self.steps.next_back()?
        };
        Some(self.describe(step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl DoubleEndedIterator for HistoryDescriptions<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let step = if self.order.is_ascending() {
            self.steps.next_back()?
        } else {
            self.steps.next()?
        };
        Some(self.describe(step))
    }
}

impl ExactSizeIterator for HistoryDescriptions<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn history_of(cells: &[Position]) -> History {
        let mut history = History::new();
        for (k, pos) in cells.iter().enumerate() {
            let board = history.tail().board().with_mark(*pos, Player::to_move_at(k));
            history.push(board);
        }
        history
    }

    #[test]
    fn test_new_history_starts_empty() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.tail_step(), 0);
        assert_eq!(history.tail().board(), &Board::new());
    }

    #[test]
    fn test_labels() {
        let history = history_of(&[Position::Center, Position::TopRight]);
        assert_eq!(history.label(0), "Go to game start");
        assert_eq!(history.label(1), "Go to move #1(1, 1)");
        assert_eq!(history.label(2), "Go to move #2(2, 0)");
    }

    #[test]
    fn test_truncate_after() {
        let mut history = history_of(&[Position::Center, Position::TopLeft, Position::BottomRight]);
        assert_eq!(history.truncate_after(1), 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.truncate_after(1), 0);
    }

    #[test]
    fn test_moves_follow_alternation() {
        let history = history_of(&[Position::Center, Position::TopLeft]);
        let moves: Vec<_> = history.moves().collect();
        assert_eq!(
            moves,
            vec![
                Some(Move::new(Player::X, Position::Center)),
                Some(Move::new(Player::O, Position::TopLeft)),
            ]
        );
    }

    #[test]
    fn test_descriptions_reverse_when_descending() {
        let history = history_of(&[Position::Center, Position::TopLeft]);
        let ascending: Vec<_> = HistoryDescriptions::new(&history, 1, HistoryOrder::Ascending).collect();
        let mut descending: Vec<_> =
            HistoryDescriptions::new(&history, 1, HistoryOrder::Descending).collect();
        descending.reverse();
        assert_eq!(ascending, descending);
        assert_eq!(ascending.iter().filter(|d| d.is_current).count(), 1);
        assert!(ascending[1].is_current);
    }

    #[test]
    fn test_descriptions_exact_size() {
        let history = history_of(&[Position::Center]);
        let mut iter = HistoryDescriptions::new(&history, 0, HistoryOrder::Descending);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next().map(|d| d.step), Some(1));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next_back().map(|d| d.step), Some(0));
    }
}
