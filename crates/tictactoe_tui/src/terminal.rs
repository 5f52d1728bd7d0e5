//! Terminal setup, teardown and the event loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

use crate::app::App;

/// Owns the terminal while the UI runs and restores it when dropped.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen and enables mouse capture.
    ///
    /// # Errors
    ///
    /// Fails if any step fails; steps already taken are undone first.
    #[instrument]
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            leave(&mut stdout);
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                leave(&mut io::stdout());
                return Err(e).context("Failed to create terminal");
            }
        };

        info!("Terminal acquired");
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Terminal to draw on.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Leaves raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns the first failure; the guard will not retry on drop.
    #[instrument(skip(self))]
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        self.terminal
            .show_cursor()
            .context("Failed to show cursor")?;
        info!("Terminal restored");
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Best-effort cleanup when acquisition fails halfway.
fn leave(stdout: &mut Stdout) {
    let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
    let _ = disable_raw_mode();
}

/// Runs the event loop until the app stops.
///
/// Each iteration draws the active screen, waits up to `tick` for an input
/// event, then advances timers.
#[instrument(skip(terminal, app))]
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick: Duration) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!("Starting event loop");
    while app.is_running() {
        terminal
            .draw(|frame| app.render(frame))
            .context("Failed to draw frame")?;

        if event::poll(tick).context("Failed to poll input")? {
            let event = event::read().context("Failed to read input")?;
            app.handle_event(&event, Instant::now());
        }

        app.tick(Instant::now());
    }
    debug!("Event loop finished");
    Ok(())
}
