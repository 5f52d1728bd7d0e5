//! Screen implementations.

mod board;
mod menu;

pub use board::BoardScreen;
pub use menu::{MenuOption, MenuScreen};
