//! Terminal UI for rewind.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::{App, AppTransition, Focus};
pub use input::{digit_cell, move_cursor, move_selection};
pub use terminal::TerminalGuard;
pub use ui::{Hit, HitMap, draw};

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use rewind_tictactoe::Session;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use crate::AppConfig;

/// Run the TUI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    init_file_tracing(config)?;

    info!("Starting rewind TUI");

    // Dropping the guard on any early return restores the terminal.
    let mut guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(Session::new(*config.sort_order(), *config.show_banner()));
    let res = run_app(&mut terminal, app, config.tick_rate());
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Rewind TUI exited");

    res?;
    restored.context("Failed to restore terminal")
}

/// Logs to the configured file so output does not interfere with the TUI.
fn init_file_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draw, wait for one input event, handle it, repeat.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut hit_map = HitMap::default();
        terminal.draw(|f| hit_map = draw(f, &app))?;
        app.set_hit_map(hit_map);

        if !event::poll(tick_rate)? {
            continue;
        }

        let transition = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            other => {
                debug!(event = ?other, "Ignoring event");
                AppTransition::Stay
            }
        };

        if transition == AppTransition::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}
