//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player who places a mark when leaving the given step.
    ///
    /// Turn parity is never stored: step 0 (the empty board) hands the move
    /// to X, step 1 to O, and so on.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark returns a new board and leaves the
/// original untouched, so history snapshots can never be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                write!(f, "{symbol}")?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Status of a viewed position.
///
/// Displays as the status line shown above the history list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// No complete line yet.
    #[display("Next player: {}", to_move)]
    InProgress {
        /// Player whose turn it is at this step.
        to_move: Player,
    },
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Won(Player),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress { .. } => None,
        }
    }

    /// Returns true once a line is complete.
    pub fn is_won(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

/// Display order of the move history list.
///
/// Purely cosmetic: it never affects the board, the turn or the viewed step.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum HistoryOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl HistoryOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            HistoryOrder::Ascending => HistoryOrder::Descending,
            HistoryOrder::Descending => HistoryOrder::Ascending,
        }
    }

    /// Returns true for oldest-first display.
    pub fn is_ascending(self) -> bool {
        matches!(self, HistoryOrder::Ascending)
    }
}
