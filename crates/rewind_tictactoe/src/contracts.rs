//! Contract-based validation for the `play` command.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::terminal_mark;
use super::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index names a board position.
pub struct CellInBounds;

impl CellInBounds {
    /// Resolves `cell` to a position.
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))
    }
}

/// Precondition: the latest tail has no winner.
///
/// Checked against the tail rather than the viewed step, so a won game
/// stays closed even while looking at earlier positions.
pub struct LineNotWon;

impl LineNotWon {
    /// Fails with the winner if the line is already decided.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        match terminal_mark(engine.history().tail().board()) {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square is empty on the board being extended.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if `pos` is taken on the viewed board.
    #[instrument(skip(engine))]
    pub fn check(pos: Position, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition for `play`.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(engine))]
    pub fn check(cell: usize, engine: &GameEngine) -> Result<(), MoveError> {
        let pos = CellInBounds::check(cell)?;
        LineNotWon::check(engine)?;
        SquareIsEmpty::check(pos, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for the `play` command.
///
/// Preconditions:
/// - Cell is on the board
/// - The line is not already won
/// - Square is empty at the viewed step
///
/// Postconditions:
/// - Every engine invariant holds
/// - History grew by exactly one entry past the branch point
pub struct PlayContract;

impl Contract<GameEngine, usize> for PlayContract {
    fn pre(engine: &GameEngine, cell: &usize) -> Result<(), MoveError> {
        LegalPlay::check(*cell, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let expected_len = before.viewed_step() + 2;
        if after.history().len() != expected_len || after.viewed_step() != expected_len - 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} entries viewed at the tail, found {} viewed at {}",
                expected_len,
                after.history().len(),
                after.viewed_step()
            )));
        }
        Ok(())
    }
}
