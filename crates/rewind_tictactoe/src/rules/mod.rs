//! Board rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board) or a pair of boards.
//! Nothing here holds state or knows about history; the engine composes
//! these to validate moves and describe transitions.

pub mod diff;
pub mod draw;
pub mod win;

pub use diff::single_cell_diff;
pub use draw::is_full;
pub use win::{LINES, terminal_mark};
