//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use rewind_tictactoe::{GameView, Position, Session};
use tracing::{debug, instrument};

use super::input::{digit_cell, move_cursor, move_selection};
use super::ui::{Hit, HitMap};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// The result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTransition {
    /// Keep running.
    Stay,
    /// Exit the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    session: Session,
    /// Highlighted board cell.
    cursor: Position,
    /// Panel receiving navigation keys.
    focus: Focus,
    /// History index highlighted in the move list.
    selected_move: usize,
    /// Screen regions from the last draw, for mouse clicks.
    #[getter(skip)]
    hit_map: HitMap,
}

impl App {
    /// Creates a new application around `session`.
    #[instrument(skip(session))]
    pub fn new(session: Session) -> Self {
        let selected_move = session.game().current_move();
        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move,
            hit_map: HitMap::default(),
        }
    }

    /// Projects the session for rendering.
    pub fn view(&self) -> GameView {
        GameView::project(&self.session)
    }

    /// Records where the last frame put its clickable regions.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Row of the selected move within the displayed move list.
    pub fn selected_row(&self) -> usize {
        self.session
            .game()
            .moves_in_display_order()
            .iter()
            .position(|&m| m == self.selected_move)
            .unwrap_or(0)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppTransition {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppTransition::Quit;
        }
        if let Some(index) = digit_cell(key.code) {
            self.play(index);
            return AppTransition::Stay;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppTransition::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_sort(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::Moves => self.jump(self.selected_move),
            },
            code @ (KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::Moves => {
                    let order = self.session.game().moves_in_display_order();
                    let row = move_selection(self.selected_row(), order.len(), code);
                    self.selected_move = order[row];
                }
            },
            _ => {}
        }
        AppTransition::Stay
    }

    /// Handles a mouse event; left clicks act on whatever was drawn there.
    #[instrument(skip(self), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return AppTransition::Stay;
        }
        match self.hit_map.hit(mouse.column, mouse.row) {
            Some(Hit::Cell(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.play(pos.to_index());
            }
            Some(Hit::Move(move_number)) => {
                self.focus = Focus::Moves;
                self.jump(move_number);
            }
            Some(Hit::SortToggle) => self.toggle_sort(),
            None => {}
        }
        AppTransition::Stay
    }

    fn update(&mut self, f: impl FnOnce(Session) -> Session) {
        let session = std::mem::take(&mut self.session);
        self.session = f(session);
    }

    fn play(&mut self, index: usize) {
        self.update(|s| s.click_cell(index));
        self.selected_move = self.session.game().current_move();
    }

    fn jump(&mut self, move_number: usize) {
        self.update(|s| s.click_move(move_number));
        self.selected_move = self.session.game().current_move();
    }

    fn toggle_sort(&mut self) {
        self.update(Session::click_sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::SortOrder;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn new_app() -> App {
        App::new(Session::new(SortOrder::Ascending, true))
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let mut app = new_app();
        for c in ['1', '5', '2', '6', '3'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.view().status(), "Winner: X");
        assert!(*app.session().banner());
        assert_eq!(*app.selected_move(), 5);
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = new_app();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session().game().len(), 2);
        assert!(!app.session().game().current_board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_move_list_navigation_jumps() {
        let mut app = new_app();
        for c in ['1', '5', '2'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(*app.focus(), Focus::Moves);
        app.handle_key(key(KeyCode::Home));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session().game().current_move(), 1);
        assert_eq!(app.view().status(), "Next player: O");
    }

    #[test]
    fn test_sort_key_keeps_selected_move() {
        let mut app = new_app();
        for c in ['1', '5'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.selected_row(), 2);
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.session().game().sort_order(), SortOrder::Descending);
        assert_eq!(*app.selected_move(), 2);
        assert_eq!(app.selected_row(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), AppTransition::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), AppTransition::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppTransition::Quit
        );
    }

    #[test]
    fn test_click_outside_any_region_is_ignored() {
        let mut app = new_app();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(app.handle_mouse(click), AppTransition::Stay);
        assert_eq!(app.session().game().len(), 1);
    }
}
