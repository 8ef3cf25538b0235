//! Stateless UI rendering for the game screen.
//!
//! [`draw`] renders one frame from an [`App`] and returns a [`HitMap`]
//! describing where the clickable elements ended up.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameStatus, GameView, Player, Position, Square};

use super::app::{App, Focus};

/// A clickable element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// A move-list entry, by history index.
    Move(usize),
    /// The sort toggle button.
    SortToggle,
}

/// Clickable screen regions from the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: Vec<(Rect, Position)>,
    moves: Vec<(Rect, usize)>,
    sort_toggle: Option<Rect>,
}

impl HitMap {
    /// Returns the element drawn at terminal coordinates `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let point = ratatui::layout::Position::new(column, row);
        if let Some((_, pos)) = self.cells.iter().find(|(r, _)| r.contains(point)) {
            return Some(Hit::Cell(*pos));
        }
        if let Some((_, m)) = self.moves.iter().find(|(r, _)| r.contains(point)) {
            return Some(Hit::Move(*m));
        }
        self.sort_toggle
            .filter(|r| r.contains(point))
            .map(|_| Hit::SortToggle)
    }

    /// Area drawn for board cell `pos`.
    pub fn cell_area(&self, pos: Position) -> Option<Rect> {
        self.cells.iter().find(|(_, p)| *p == pos).map(|(r, _)| *r)
    }

    /// Area drawn for the move-list entry of history index `move_number`.
    pub fn move_area(&self, move_number: usize) -> Option<Rect> {
        self.moves
            .iter()
            .find(|(_, m)| *m == move_number)
            .map(|(r, _)| *r)
    }

    /// Area drawn for the sort toggle button.
    pub fn sort_toggle_area(&self) -> Option<Rect> {
        self.sort_toggle
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let view = app.view();
    let mut hit_map = HitMap::default();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], &view, app, &mut hit_map);
    draw_history(frame, body[1], &view, app, &mut hit_map);

    let status_color = match view.game_status() {
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::InProgress => Color::Yellow,
    };
    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9/Enter: play  Tab: focus  s: sort  Enter on move: jump  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    hit_map
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, app: &App, hit_map: &mut HitMap) {
    let focused = *app.focus() == Focus::Board;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);

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

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, row_area, row, view, app.cursor(), focused, hit_map);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    row: usize,
    view: &GameView,
    cursor: &Position,
    focused: bool,
    hit_map: &mut HitMap,
) {
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

    for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cell_area, view, pos, focused && pos == *cursor);
            hit_map.cells.push((cell_area, pos));
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, pos: Position, under_cursor: bool) {
    let (symbol, base_style) = match view.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if view.is_winning_square(pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically centre the mark in the 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, view: &GameView, app: &App, hit_map: &mut HitMap) {
    let focused = *app.focus() == Focus::Moves;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("History")
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if view.banner().is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // You are at move #N
            Constraint::Length(1),             // Sort toggle
            Constraint::Length(1),             // Spacer
            Constraint::Min(1),                // Move list
            Constraint::Length(banner_height), // Victory banner
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(view.position_label().as_str()), chunks[0]);

    let button_text = format!("[ {} ]", view.sort_label());
    let button_area = Rect {
        width: (button_text.chars().count() as u16).min(chunks[1].width),
        ..chunks[1]
    };
    let button = Paragraph::new(button_text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(button, button_area);
    hit_map.sort_toggle = Some(button_area);

    draw_move_list(frame, chunks[3], view, app, focused, hit_map);

    if let Some(banner) = view.banner() {
        let banner = Paragraph::new(banner.as_str())
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Victory"));
        frame.render_widget(banner, chunks[4]);
    }
}

fn draw_move_list(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    app: &App,
    focused: bool,
    hit_map: &mut HitMap,
) {
    let visible = area.height as usize;
    if visible == 0 {
        return;
    }
    let selected_row = app.selected_row();
    let offset = selected_row.saturating_sub(visible - 1);

    for (i, item) in view.moves().iter().skip(offset).take(visible).enumerate() {
        let row_area = Rect {
            y: area.y + i as u16,
            height: 1,
            ..area
        };
        let marker = if *item.is_current() { "> " } else { "  " };
        let mut style = if *item.is_current() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if focused && offset + i == selected_row {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let line = Paragraph::new(format!("{}{}", marker, item.label())).style(style);
        frame.render_widget(line, row_area);
        hit_map.moves.push((row_area, *item.move_number()));
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
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
