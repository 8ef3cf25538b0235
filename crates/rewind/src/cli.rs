//! Command-line interface for rewind.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with time-travel move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe in the terminal with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal UI
    Play {
        /// Path to a TOML config file (defaults to ./rewind.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Start with the move list sorted latest-first
        #[arg(long)]
        descending: bool,
    },

    /// Play a fixed sequence of cells and print the resulting screen
    Script {
        /// Cell indices (0-8, row-major) played in order; illegal ones are skipped
        #[arg(required = true)]
        cells: Vec<usize>,

        /// Jump to this move after playing all cells
        #[arg(long)]
        jump: Option<usize>,

        /// Path to a TOML config file (defaults to ./rewind.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the move list latest-first
        #[arg(long)]
        descending: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_with_jump() {
        let cli = Cli::try_parse_from(["rewind", "script", "0", "4", "1", "--jump", "1"])
            .expect("valid args");
        match cli.command {
            Command::Script { cells, jump, .. } => {
                assert_eq!(cells, vec![0, 4, 1]);
                assert_eq!(jump, Some(1));
            }
            Command::Play { .. } => panic!("expected script command"),
        }
    }

    #[test]
    fn test_script_requires_cells() {
        assert!(Cli::try_parse_from(["rewind", "script"]).is_err());
    }
}
