//! Application state and key handling.

use super::input::move_cursor;
use crate::config::RewindConfig;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameEngine, HistoryOrder, Position, is_full};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    message: String,
    initial_order: HistoryOrder,
    show_coordinates: bool,
    should_quit: bool,
}

const HELP: &str = "Arrows move, Enter plays, [ ] step, Home/End, o order, n new, q quit";

impl App {
    /// Creates a new application from config.
    pub fn new(config: &RewindConfig) -> Self {
        Self {
            engine: GameEngine::with_order(*config.history_order()),
            cursor: Position::Center,
            message: HELP.to_string(),
            initial_order: *config.history_order(),
            show_coordinates: *config.show_coordinates(),
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether empty squares show their (column, row).
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('o') => {
                self.engine.toggle_history_order();
                self.message = format!("History order: {}", self.engine.order());
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('[') => {
                let step = self.engine.viewed_step().saturating_sub(1);
                self.jump(step);
            }
            KeyCode::Char(']') => self.jump(self.engine.viewed_step() + 1),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.engine.history().tail_step()),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Makes a move at the given position.
    fn play(&mut self, pos: Position) {
        debug!(position = ?pos, "Making move");
        match self.engine.play(pos.to_index()) {
            Ok(placement) => {
                self.message = if placement.discarded > 0 {
                    format!(
                        "{} played {}, replacing {} later move(s)",
                        placement.mv.player,
                        pos.label(),
                        placement.discarded
                    )
                } else {
                    format!("{} played {}", placement.mv.player, pos.label())
                };
                if is_full(self.engine.current_board()) && !self.engine.status().is_won() {
                    self.message.push_str(". Board is full, press 'n' for a new game");
                }
            }
            Err(e) => {
                self.message = format!("Invalid move: {}", e);
            }
        }
    }

    fn jump(&mut self, step: usize) {
        match self.engine.jump_to(step) {
            Ok(()) => {
                self.message = self.engine.history().label(step);
            }
            Err(e) => {
                self.message = e.to_string();
            }
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine = GameEngine::with_order(self.initial_order);
        self.cursor = Position::Center;
        self.message = "New game. X to move.".to_string();
    }
}
