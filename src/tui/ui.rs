//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::input::{CELL_HEIGHT, CELL_WIDTH};
use crate::games::tictactoe::{Cell, Player, Position, WinningLine};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const HELP: &str = "arrows move  enter/click mark  g mode  0/1 level  r restart  q quit";

/// Renders the whole screen and returns the board's area for hit testing.
pub fn draw(frame: &mut Frame, app: &App) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let session = app.session();
    let title = Paragraph::new(format!(
        "Strictly Tic-Tac-Toe  [{} | {}]",
        session.mode(),
        session.engine().strategy()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
    draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    board_area
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(area);

    let winning = app.session().winning_line();
    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, winning, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, winning: Option<WinningLine>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, winning, (row, col));
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    winning: Option<WinningLine>,
    (row, col): (usize, usize),
) {
    let cell = app.session().board().cell(row, col).unwrap_or_default();

    let (symbol, mut style) = match cell {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Marked(Player::PlayerA) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Player::PlayerB) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if winning.is_some_and(|line| line.contains((row, col))) {
        style = style.bg(Color::Green);
    }
    if Position::from_coord((row, col)) == Some(app.cursor()) && app.session().is_running() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Centre the symbol vertically inside the cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(usize::from(area.width)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); usize::from(area.height)])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
