//! First-class action types for tic-tac-toe.
//!
//! Moves are never stored: history keeps board snapshots and a move is
//! recovered from any two consecutive snapshots.

use super::rules::single_cell_diff;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Recovers the move that turned `before` into `after`.
    ///
    /// Returns `None` if the boards are identical or the changed cell is
    /// empty in `after`.
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let position = single_cell_diff(before, after)?;
        let player = after.get(position).player()?;
        Some(Self { player, position })
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Outcome of an accepted `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// History index of the new entry.
    pub step: usize,
    /// The move that was appended.
    pub mv: Move,
    /// Number of future entries dropped because play resumed from the past.
    pub discarded: usize,
}

/// Error that can occur when validating or applying a command.
///
/// A rejected command never changes engine state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The line being played already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// A jump targeted a step that does not exist.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
