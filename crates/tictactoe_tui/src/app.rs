//! Application context and screen dispatch.

use crossterm::event::Event;
use derive_getters::Getters;
use ratatui::Frame;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::input::{ClickTracker, InputEvent, translate};
use crate::screen::{Screen, ScreenTransition};
use crate::screens::{BoardScreen, MenuScreen};
use crate::settings::PlayMode;

/// Everything the event loop mutates.
///
/// `play_mode` doubles as the active-screen selector: `None` shows the menu,
/// `Some` shows the board.
#[derive(Debug, Getters)]
pub struct App {
    config: AppConfig,
    running: bool,
    play_mode: Option<PlayMode>,
    menu: MenuScreen,
    board: BoardScreen,
    #[getter(skip)]
    clicks: ClickTracker,
}

impl App {
    /// Creates the context with the menu showing.
    #[instrument(skip(config, now))]
    pub fn new(config: AppConfig, now: Instant) -> Self {
        info!(title = %config.title(), "Creating App");
        Self {
            menu: MenuScreen::new(config.title()),
            board: BoardScreen::new(&config, now),
            clicks: ClickTracker::new(config.double_click_window()),
            config,
            running: true,
            play_mode: None,
        }
    }

    /// Returns false once the user has asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Skips the menu and opens the board in `mode`.
    pub fn start(&mut self, mode: PlayMode, now: Instant) {
        self.apply(ScreenTransition::StartGame(mode), now);
    }

    /// Decodes a terminal event and forwards it to the active screen.
    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        if let Some(input) = translate(event, &mut self.clicks, now) {
            self.handle_input(input, now);
        }
    }

    /// Forwards a decoded input to the active screen and applies the result.
    #[instrument(skip(self, now))]
    pub fn handle_input(&mut self, input: InputEvent, now: Instant) {
        let transition = match self.play_mode {
            None => self.menu.handle_input(input, now),
            Some(_) => self.board.handle_input(input, now),
        };
        self.apply(transition, now);
    }

    /// Advances timers on the active screen.
    pub fn tick(&mut self, now: Instant) {
        match self.play_mode {
            None => self.menu.tick(now),
            Some(_) => self.board.tick(now),
        }
    }

    /// Draws the active screen.
    pub fn render(&mut self, frame: &mut Frame) {
        match self.play_mode {
            None => self.menu.render(frame),
            Some(_) => self.board.render(frame),
        }
    }

    #[instrument(skip(self, now))]
    fn apply(&mut self, transition: ScreenTransition, now: Instant) {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::StartGame(mode) => {
                self.board.start(mode, now);
                self.play_mode = Some(mode);
            }
            ScreenTransition::ReturnToMenu => {
                info!("Returning to menu");
                self.play_mode = None;
            }
            ScreenTransition::Quit => {
                info!("Quit requested");
                self.running = false;
            }
        }
        debug!(mode = ?self.play_mode, running = self.running, "Transition applied");
    }
}
