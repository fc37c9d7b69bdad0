//! Game engine with time travel.
//!
//! [`GameEngine`] owns the history of board snapshots, the step currently
//! being viewed and the history display order. Commands mutate that state;
//! queries read it back. Whose turn it is is always derived from the
//! viewed step, never stored.

use super::action::{Move, MoveError, Placement};
use super::contracts::{CellInBounds, Contract, PlayContract};
use super::history::{History, HistoryDescriptions, MoveDescription};
use super::rules::terminal_mark;
use super::types::{Board, GameStatus, HistoryOrder, Player};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Tic-tac-toe engine with history, time travel and branching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: History,
    pub(crate) viewed_step: usize,
    pub(crate) order: HistoryOrder,
}

impl GameEngine {
    /// Creates a new game with ascending history order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(HistoryOrder::default())
    }

    /// Creates a new game with the given history order.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: History::new(),
            viewed_step: 0,
            order,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the next mark at `cell` (0-8).
    ///
    /// When the viewed step is behind the tail, everything after it is
    /// discarded first and the move extends the viewed board. The move is
    /// rejected, with state left untouched, if the latest tail already has
    /// a winner or the cell is taken.
    #[instrument(skip(self), fields(viewed_step = self.viewed_step, len = self.history.len()))]
    pub fn play(&mut self, cell: usize) -> Result<Placement, MoveError> {
        if let Err(err) = PlayContract::pre(self, &cell) {
            warn!(error = %err, "Move rejected");
            return Err(err);
        }
        let position = CellInBounds::check(cell)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let board = self.current_board().with_mark(position, player);
        let discarded = self.history.truncate_after(self.viewed_step);
        self.history.push(board);
        self.viewed_step = self.history.tail_step();

        #[cfg(debug_assertions)]
        {
            if let Err(err) = PlayContract::post(&before, self) {
                warn!(error = %err, "Postcondition failed, restoring previous state");
                *self = before;
                return Err(err);
            }
        }

        let placement = Placement {
            step: self.viewed_step,
            mv: Move::new(player, position),
            discarded,
        };
        debug!(?placement, "Move applied");
        Ok(placement)
    }

    /// Views the board at `step` without changing history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            let err = MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            };
            warn!(error = %err, "Jump rejected");
            return Err(err);
        }
        self.viewed_step = step;
        debug!(step, "Viewing step");
        Ok(())
    }

    /// Flips the history display order.
    #[instrument(skip(self))]
    pub fn toggle_history_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = %self.order, "History order toggled");
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Board at the viewed step.
    pub fn current_board(&self) -> &Board {
        // viewed_step < len is an engine invariant; the tail fallback is never taken.
        self.history
            .get(self.viewed_step)
            .unwrap_or_else(|| self.history.tail())
            .board()
    }

    /// Status line for the viewed step.
    ///
    /// The player to move is derived from the viewed step, so time travel
    /// shows the turn as it was at that point.
    pub fn status(&self) -> GameStatus {
        status_at(self.current_board(), self.viewed_step)
    }

    /// Status of the latest tail, the canonical state of the game.
    pub fn tail_status(&self) -> GameStatus {
        status_at(self.history.tail().board(), self.history.tail_step())
    }

    /// Player who would move from the viewed step.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.viewed_step)
    }

    /// Display rows for every history entry, in the current order.
    pub fn history_descriptions(&self) -> HistoryDescriptions<'_> {
        HistoryDescriptions::new(&self.history, self.viewed_step, self.order)
    }

    /// Returns the history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the viewed step.
    pub fn viewed_step(&self) -> usize {
        self.viewed_step
    }

    /// Returns the history display order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// True when the viewed step is behind the tail.
    pub fn is_viewing_past(&self) -> bool {
        self.viewed_step < self.history.tail_step()
    }

    /// Serializable view for front ends.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.current_board(),
            status: self.status(),
            status_line: self.status().to_string(),
            viewed_step: self.viewed_step,
            order: self.order,
            history: self.history_descriptions().collect(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn status_at(board: &Board, step: usize) -> GameStatus {
    match terminal_mark(board) {
        Some(player) => GameStatus::Won(player),
        None => GameStatus::InProgress {
            to_move: Player::to_move_at(step),
        },
    }
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Board at the viewed step.
    pub board: Board,
    /// Status at the viewed step.
    pub status: GameStatus,
    /// `status` rendered as text.
    pub status_line: String,
    /// Viewed step.
    pub viewed_step: usize,
    /// History display order.
    pub order: HistoryOrder,
    /// History rows in display order.
    pub history: Vec<MoveDescription>,
}
