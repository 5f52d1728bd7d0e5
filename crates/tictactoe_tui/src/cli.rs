//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::settings::PlayMode;

/// Tic-tac-toe in the terminal, against a friend or the computer.
#[derive(Debug, Parser)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log file, overriding the config
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Skip the menu and start in this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<PlayMode>,
}
