//! Non-interactive play: apply a list of commands and report the result.

use derive_more::{Display, Error};
use rewind_tictactoe::{GameEngine, GameSnapshot, HistoryOrder, MoveError};
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// One engine command in script form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScriptCommand {
    /// `play:N`
    Play(usize),
    /// `jump:N`
    Jump(usize),
    /// `toggle`
    Toggle,
}

impl FromStr for ScriptCommand {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.eq_ignore_ascii_case("toggle") {
            return Ok(ScriptCommand::Toggle);
        }
        let (verb, arg) = input
            .split_once(':')
            .ok_or_else(|| ScriptError::new(input, "expected play:N, jump:N or toggle"))?;
        let value: usize = arg
            .trim()
            .parse()
            .map_err(|_| ScriptError::new(input, "argument must be a non-negative integer"))?;
        match verb.trim().to_ascii_lowercase().as_str() {
            "play" => Ok(ScriptCommand::Play(value)),
            "jump" => Ok(ScriptCommand::Jump(value)),
            _ => Err(ScriptError::new(input, "unknown command")),
        }
    }
}

impl std::fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptCommand::Play(cell) => write!(f, "play:{}", cell),
            ScriptCommand::Jump(step) => write!(f, "jump:{}", step),
            ScriptCommand::Toggle => write!(f, "toggle"),
        }
    }
}

/// Malformed script command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid command '{}': {}", input, reason)]
pub struct ScriptError {
    /// The offending input.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

impl ScriptError {
    fn new(input: &str, reason: &str) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Parses every command, failing on the first malformed one.
pub fn parse_commands<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<ScriptCommand>, ScriptError> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

/// A command the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Zero-based position in the script.
    pub index: usize,
    /// The command as written.
    pub command: String,
    /// Engine error message.
    pub reason: String,
}

/// Final state after a script run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Engine state after the last command.
    pub snapshot: GameSnapshot,
    /// Commands the engine refused, in order.
    pub rejected: Vec<Rejection>,
}

/// Applies `commands` to a fresh engine.
///
/// Rejected commands leave the engine unchanged and are collected in the
/// report. With `strict`, the first rejection is returned as an error.
#[instrument(skip(commands), fields(count = commands.len()))]
pub fn run_script(
    commands: &[ScriptCommand],
    order: HistoryOrder,
    strict: bool,
) -> Result<ScriptReport, MoveError> {
    let mut engine = GameEngine::with_order(order);
    let mut rejected = Vec::new();

    for (index, command) in commands.iter().enumerate() {
        let result = match command {
            ScriptCommand::Play(cell) => engine.play(*cell).map(|placement| {
                debug!(?placement, "Script move applied");
            }),
            ScriptCommand::Jump(step) => engine.jump_to(*step),
            ScriptCommand::Toggle => {
                engine.toggle_history_order();
                Ok(())
            }
        };
        if let Err(err) = result {
            warn!(index, %command, error = %err, "Script command rejected");
            if strict {
                return Err(err);
            }
            rejected.push(Rejection {
                index,
                command: command.to_string(),
                reason: err.to_string(),
            });
        }
    }

    Ok(ScriptReport {
        snapshot: engine.snapshot(),
        rejected,
    })
}

/// Plain-text rendering of a report.
pub fn render_text(report: &ScriptReport) -> String {
    let snapshot = &report.snapshot;
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.board);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", snapshot.status_line);
    let _ = writeln!(out, "History ({}):", snapshot.order);
    for entry in &snapshot.history {
        let marker = if entry.is_current { '>' } else { ' ' };
        let _ = writeln!(out, "{} {}. {}", marker, entry.step + 1, entry.label);
    }
    for rejection in &report.rejected {
        let _ = writeln!(
            out,
            "rejected #{} {}: {}",
            rejection.index, rejection.command, rejection.reason
        );
    }
    out
}
