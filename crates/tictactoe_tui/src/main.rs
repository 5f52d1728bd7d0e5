//! Tic-tac-toe terminal game.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tictactoe_tui::{App, AppConfig, Cli, TerminalGuard, terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(log_file) = cli.log_file {
        config.set_log_file(log_file);
    }

    init_tracing(config.log_file())?;
    info!(mode = ?cli.mode, "Starting tictactoe");

    let tick = config.tick_interval();
    let mut app = App::new(config, Instant::now());
    if let Some(mode) = cli.mode {
        app.start(mode, Instant::now());
    }

    let mut guard = TerminalGuard::acquire()?;
    let result = terminal::run(guard.terminal(), &mut app, tick);
    guard.restore()?;

    info!("Goodbye");
    result
}

/// Sends tracing output to `path`; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,tictactoe_engine=debug,tictactoe_tui=debug")
            }),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
