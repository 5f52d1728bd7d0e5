//! Screen trait and transition type for the game's state machine.

use ratatui::Frame;
use std::time::Instant;

use crate::input::InputEvent;
use crate::settings::PlayMode;

/// The result of handling an input event on a screen.
///
/// Screens return this instead of calling back into the context; the
/// [`App`](crate::App) applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Leave the menu and open the board in the given mode.
    StartGame(PlayMode),
    /// Leave the board and show the menu again.
    ReturnToMenu,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles input.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    ///
    /// Takes `&mut self` so screens can remember where they drew clickable
    /// regions.
    fn render(&mut self, frame: &mut Frame);

    /// Handles an input event and returns the resulting [`ScreenTransition`].
    fn handle_input(&mut self, input: InputEvent, now: Instant) -> ScreenTransition;

    /// Advances timers.
    fn tick(&mut self, _now: Instant) {}
}
