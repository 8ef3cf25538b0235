//! Headless play: run a list of cell clicks and print the resulting screen.

use rewind_tictactoe::{GameView, Position, Session};
use tracing::{info, instrument};

use crate::AppConfig;

/// Plays `cells` in order, optionally jumps to `jump`, and returns the session.
///
/// Illegal cells are skipped exactly as clicks on the board would be.
#[instrument(skip(config))]
pub fn run_script(config: &AppConfig, cells: &[usize], jump: Option<usize>) -> Session {
    let session = cells.iter().fold(
        Session::new(*config.sort_order(), *config.show_banner()),
        |session, &cell| session.click_cell(cell),
    );
    let session = match jump {
        Some(move_number) => session.click_move(move_number),
        None => session,
    };
    info!(
        moves = session.game().len() - 1,
        current_move = session.game().current_move(),
        "Script finished"
    );
    session
}

/// Renders a view as plain text, one section per display element.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();

    if let Some(banner) = view.banner() {
        out.push_str(&format!("*** {} ***\n\n", banner));
    }

    out.push_str(view.status());
    out.push_str("\n\n");

    out.push_str(&view.board().display());
    out.push('\n');

    if let Some(line) = view.winning_line() {
        let names: Vec<&str> = line.iter().map(Position::label).collect();
        out.push_str(&format!("Winning line: {}\n", names.join(", ")));
    }

    out.push('\n');
    out.push_str(view.position_label());
    out.push('\n');
    out.push_str(&format!("[{}]\n", view.sort_label()));

    for item in view.moves() {
        let marker = if *item.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, item.label()));
    }

    out
}
