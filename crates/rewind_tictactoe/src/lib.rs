//! Tic-tac-toe state engine with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over boards (win detection, transition diffs)
//! - **History**: ordered board snapshots, truncated when play resumes from
//!   the past
//! - **Engine**: commands (`play`, `jump_to`, `toggle_history_order`) and
//!   queries (`current_board`, `status`, `history_descriptions`)
//! - **Contracts / Invariants**: checkable guarantees about every reachable
//!   engine state
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::GameEngine;
//!
//! let mut engine = GameEngine::new();
//! engine.play(4).unwrap();
//! engine.play(0).unwrap();
//! engine.jump_to(1).unwrap();
//! assert_eq!(engine.status().to_string(), "Next player: O");
//!
//! let labels: Vec<_> = engine.history_descriptions().map(|d| d.label).collect();
//! assert_eq!(labels[1], "Go to move #1(1, 1)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, Placement};
pub use engine::{GameEngine, GameSnapshot};
pub use history::{
    GAME_START_LABEL, History, HistoryDescriptions, HistoryEntry, MoveDescription,
};
pub use position::Position;
pub use rules::{is_full, single_cell_diff, terminal_mark};
pub use types::{Board, GameStatus, HistoryOrder, Player, Square};

/// Alias for clarity in front ends.
pub type Mark = Player;
