//! Frame rendering: board, status line and move history.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{Board, GameStatus, Player, Position, Square};

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(13), Constraint::Length(3)])
        .split(f.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_board(f, columns[0], app);
    render_info(f, columns[1], app);

    let message = Paragraph::new(app.message())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(message, rows[1]);
}

/// Renders the tic-tac-toe board at the viewed step.
fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board = app.engine().current_board();
    let title = if app.engine().is_viewing_past() {
        format!("Board (step {}, viewing past)", app.engine().viewed_step())
    } else {
        format!("Board (step {})", app.engine().viewed_step())
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, 29, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], board, app, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, app, 1);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, app, 2);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (col, slot) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_square(f, cols[slot], board, app, pos);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, app: &App, pos: Position) {
    let (text, mut style) = match board.get(pos) {
        Square::Empty if app.show_coordinates() => (
            format!("{},{}", pos.column(), pos.row()),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    // Center vertically within the 3-line cell.
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(text)])
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

/// Renders status, order toggle and history list.
fn render_info(f: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status = engine.status();
    let status_style = match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::InProgress { .. } => Style::default(),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(status.to_string(), status_style),
        Span::raw("   "),
        Span::styled(
            format!("[{}]", engine.order()),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(header, rows[0]);

    let items: Vec<ListItem> = engine
        .history_descriptions()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if entry.is_current { "> " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}. {}", marker, entry.step + 1, entry.label),
                style,
            )))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("History"));
    f.render_widget(list, rows[1]);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
