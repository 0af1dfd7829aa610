//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_timeline::{Board, Cell, Player, Position, move_list, status_text, winning_line};

use super::app::{App, Focus};
use crate::config::AppConfig;

const HELP: &str = "arrows/1-9 play · Tab move list · u/] step · n new · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, config: &AppConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and move list
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(30)])
        .split(chunks[1]);

    draw_board(frame, main[0], app, config);
    draw_side_panel(frame, main[1], app);

    let message = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, config: &AppConfig) {
    let board = app.game().current_snapshot().board();
    let highlight = winning_line(board);
    let focused = app.focus() == Focus::Board;

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

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(area);

        for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let cell = CellView {
                pos,
                under_cursor: focused && pos == app.cursor(),
                in_winning_line: highlight.is_some_and(|line| line.contains(pos)),
                show_coordinates: *config.show_coordinates(),
            };
            draw_cell(frame, area, board, cell);
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

struct CellView {
    pos: Position,
    under_cursor: bool,
    in_winning_line: bool,
    show_coordinates: bool,
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, view: CellView) {
    let (symbol, base_style) = match board.get(view.pos) {
        Cell::Empty if view.show_coordinates => (
            (view.pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (" ".to_string(), Style::default()),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if view.under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if view.in_winning_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell
    let text = vec![Line::from(""), Line::from(Span::styled(format!(" {symbol} "), style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status = Paragraph::new(status_text(app.game().current_snapshot()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, parts[0]);

    let items: Vec<ListItem> = move_list(app.game())
        .into_iter()
        .map(|entry| {
            let marker = if entry.is_current { "▶ " } else { "  " };
            let style = if entry.is_current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(format!("{marker}{}", entry.label), style)))
        })
        .collect();

    let focused = app.focus() == Focus::MoveList;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Moves"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, parts[1], &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
