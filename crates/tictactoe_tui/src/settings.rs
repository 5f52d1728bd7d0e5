//! Play modes offered by the menu.

use clap::ValueEnum;
use strum::Display;

/// Who sits on the other side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, ValueEnum)]
pub enum PlayMode {
    /// Two humans share the keyboard and mouse.
    #[strum(to_string = "1 vs 1")]
    OneVsOne,
    /// One human against the computer.
    #[strum(to_string = "1 vs COM")]
    OneVsCom,
}

impl PlayMode {
    /// Returns true if the computer plays one side.
    pub fn has_com(self) -> bool {
        matches!(self, Self::OneVsCom)
    }
}
