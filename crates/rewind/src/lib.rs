//! Rewind - terminal tic-tac-toe with time-travel move history.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file plus CLI overrides
//! - **TUI**: ratatui screen with clickable board, move list and sort toggle
//! - **Script**: headless play that prints the same screen as text
//!
//! Game rules and history live in [`rewind_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use script::{render_text, run_script};
