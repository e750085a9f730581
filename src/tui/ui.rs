//! Board and status rendering.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use simply_tictactoe::{BoardView, CellView, GameMode, Mark};

/// Renders one frame.
pub fn render(f: &mut Frame, app: &App) {
    let view = app.controller().view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_status(f, chunks[0], &view);
    render_board(f, chunks[1], &view, app.cursor());
    render_help(f, chunks[2], &view);
}

fn render_status(f: &mut Frame, area: Rect, view: &BoardView) {
    let text = if view.thinking {
        format!("{}  (thinking...)", view.status)
    } else {
        view.status.clone()
    };
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Tic-Tac-Toe").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, area: Rect, view: &BoardView, cursor: usize) {
    let board_area = center_rect(area, 40, 11);
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

    render_row(f, rows[0], view, 0, cursor);
    render_separator(f, rows[1]);
    render_row(f, rows[2], view, 3, cursor);
    render_separator(f, rows[3]);
    render_row(f, rows[4], view, 6, cursor);
}

fn render_row(f: &mut Frame, area: Rect, view: &BoardView, start: usize, cursor: usize) {
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

    render_square(f, cols[0], &view.cells[start], start, cursor == start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], &view.cells[start + 1], start + 1, cursor == start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], &view.cells[start + 2], start + 2, cursor == start + 2);
}

fn render_square(f: &mut Frame, area: Rect, cell: &CellView, index: usize, selected: bool) {
    let (text, mut style) = match cell.mark {
        Some(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
    };
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn render_help(f: &mut Frame, area: Rect, view: &BoardView) {
    let other = match view.mode {
        GameMode::HumanVsHuman => GameMode::HumanVsComputer,
        GameMode::HumanVsComputer => GameMode::HumanVsHuman,
    };
    let text = format!(
        "{} | 1-9 or arrows+enter: move | m: switch to {} | r: restart | q: quit",
        view.mode.name(),
        other.name(),
    );
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
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
