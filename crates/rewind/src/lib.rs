//! Rewind - tic-tac-toe front ends over the `rewind_tictactoe` engine.
//!
//! - **Config**: TOML settings for the terminal UI
//! - **Script**: apply commands non-interactively and report the result
//! - **TUI**: interactive board with time travel through the history

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod script;
pub mod tui;

pub use config::{ConfigError, RewindConfig};
pub use script::{ScriptCommand, ScriptError, ScriptReport, parse_commands, render_text, run_script};
