//! Rendering and mouse tests against ratatui's test backend.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use rewind::tui::{App, Hit, HitMap, draw};
use rewind_tictactoe::{Position, Session, SortOrder};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 24;

fn render(app: &mut App) -> (String, HitMap) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    let mut hit_map = HitMap::default();
    terminal
        .draw(|f| hit_map = draw(f, app))
        .expect("draw succeeds");
    app.set_hit_map(hit_map.clone());

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    (text, hit_map)
}

fn click(app: &mut App, area: Rect) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: area.x + area.width / 2,
        row: area.y + area.height / 2,
        modifiers: KeyModifiers::NONE,
    });
}

fn click_cell(app: &mut App, index: usize) {
    let (_, hit_map) = render(app);
    let pos = Position::from_index(index).expect("valid cell");
    click(app, hit_map.cell_area(pos).expect("cell drawn"));
}

#[test]
fn test_initial_screen() {
    let mut app = App::new(Session::new(SortOrder::Ascending, true));
    let (text, hit_map) = render(&mut app);
    assert!(text.contains("Next player: X"));
    assert!(text.contains("You are at move #0"));
    assert!(text.contains("Sort moves Descending"));
    assert!(text.contains("Go to game start"));
    assert_eq!(hit_map.move_area(1), None);
    assert!(hit_map.sort_toggle_area().is_some());
}

#[test]
fn test_mouse_win_shows_banner_and_jump_clears_it() {
    let mut app = App::new(Session::new(SortOrder::Ascending, true));
    for index in [0, 4, 1, 5, 2] {
        click_cell(&mut app, index);
    }

    let (text, hit_map) = render(&mut app);
    assert!(text.contains("Winner: X"));
    assert!(text.contains("Player X wins!"));
    assert!(text.contains("Go to move #5 (1, 3)"));

    click(&mut app, hit_map.move_area(0).expect("start entry drawn"));
    let (text, _) = render(&mut app);
    assert!(text.contains("Next player: X"));
    assert!(!text.contains("Player X wins!"));
    assert_eq!(app.session().game().current_move(), 0);
    assert_eq!(app.session().game().len(), 6);
}

#[test]
fn test_clicking_occupied_cell_changes_nothing() {
    let mut app = App::new(Session::new(SortOrder::Ascending, true));
    click_cell(&mut app, 4);
    click_cell(&mut app, 4);
    assert_eq!(app.session().game().len(), 2);
    assert_eq!(app.view().status(), "Next player: O");
}

#[test]
fn test_sort_button_click_reverses_list() {
    let mut app = App::new(Session::new(SortOrder::Ascending, true));
    click_cell(&mut app, 4);
    let (_, hit_map) = render(&mut app);
    let before = hit_map.move_area(0).expect("start entry drawn");

    click(&mut app, hit_map.sort_toggle_area().expect("button drawn"));
    let (text, hit_map) = render(&mut app);
    assert!(text.contains("Sort moves Ascending"));
    let after = hit_map.move_area(0).expect("start entry drawn");
    assert!(after.y > before.y);
}

#[test]
fn test_hit_map_resolves_cells() {
    let mut app = App::new(Session::new(SortOrder::Ascending, true));
    let (_, hit_map) = render(&mut app);
    let area = hit_map.cell_area(Position::Center).expect("center drawn");
    assert_eq!(
        hit_map.hit(area.x, area.y),
        Some(Hit::Cell(Position::Center))
    );
    assert_eq!(hit_map.hit(0, 0), None);
}
