//! Command-line interface for rewind.

use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "rewind.toml")]
        config: std::path::PathBuf,

        /// Start with the history list newest-first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of commands and print the resulting state
    Script {
        /// Commands: `play:N` (cell 0-8), `jump:N` (history step), `toggle`
        #[arg(required = true)]
        commands: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Start with the history list newest-first
        #[arg(long)]
        descending: bool,

        /// Exit with an error on the first rejected command
        #[arg(long)]
        strict: bool,
    },
}
