//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::App;
pub use ui::draw;

use crate::config::RewindConfig;
use crate::logging::init_file_tracing;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the TUI until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: RewindConfig) -> Result<()> {
    init_file_tracing(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    info!("Starting rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(&config);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI exited");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
