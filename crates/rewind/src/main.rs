//! Rewind - tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind::cli::{Cli, Command};
use rewind::logging::init_stderr_tracing;
use rewind::{RewindConfig, parse_commands, render_text, run_script};
use rewind_tictactoe::HistoryOrder;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { config, descending } => run_tui(config, descending),
        Command::Script {
            commands,
            json,
            descending,
            strict,
        } => run_script_command(commands, json, descending, strict),
    }
}

fn initial_order(descending: bool) -> HistoryOrder {
    if descending {
        HistoryOrder::Descending
    } else {
        HistoryOrder::Ascending
    }
}

/// Run the terminal UI
fn run_tui(config_path: std::path::PathBuf, descending: bool) -> Result<()> {
    let mut config = RewindConfig::load_or_default(&config_path)?;
    if descending {
        config = config.with_history_order(HistoryOrder::Descending);
    }
    rewind::tui::run_tui(config)
}

/// Run a command script and print the result
#[instrument(skip(commands))]
fn run_script_command(
    commands: Vec<String>,
    json: bool,
    descending: bool,
    strict: bool,
) -> Result<()> {
    init_stderr_tracing();

    let commands = parse_commands(&commands)?;
    info!(count = commands.len(), "Running script");
    let report = run_script(&commands, initial_order(descending), strict)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
