//! Rewind - unified CLI.

#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rewind::{AppConfig, Cli, Command, render_text, run_script, tui};
use rewind_tictactoe::{GameView, SortOrder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => {
            let config = load_config(config, descending)?;
            tui::run_tui(&config)
        }
        Command::Script {
            cells,
            jump,
            config,
            descending,
        } => {
            let config = load_config(config, descending)?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
                )
                .with_writer(std::io::stderr)
                .init();

            let session = run_script(&config, &cells, jump);
            print!("{}", render_text(&GameView::project(&session)));
            Ok(())
        }
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(path: Option<PathBuf>, descending: bool) -> Result<AppConfig> {
    let config = AppConfig::load(path.as_deref())?;
    Ok(if descending {
        config.with_sort_order(SortOrder::Descending)
    } else {
        config
    })
}
