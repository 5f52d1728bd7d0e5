//! Terminal front end for the tic-tac-toe engine.
//!
//! A menu to pick `1 vs 1` or `1 vs COM`, and a board driven by the arrow
//! keys, Enter, and the mouse. Screens report what should happen next through
//! [`ScreenTransition`]; the [`App`] context applies it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
pub mod input;
mod screen;
mod screens;
mod settings;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use input::{ClickTracker, InputEvent};
pub use screen::{Screen, ScreenTransition};
pub use screens::{BoardScreen, MenuOption, MenuScreen};
pub use settings::PlayMode;
pub use terminal::TerminalGuard;

/// Side length of the board shown by the UI.
pub const BOARD_SIZE: usize = tictactoe_engine::CLASSIC_SIZE;
