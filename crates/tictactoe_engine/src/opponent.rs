//! Automated opponents.

use crate::engine::Engine;
use crate::types::Move;
use tracing::debug;

/// Trait for automated players that pick moves.
pub trait Opponent<const N: usize> {
    /// Chooses the next move, or `None` if no move is available.
    fn choose(&mut self, engine: &Engine<N>) -> Option<Move>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Opponent that takes the first empty cell, row by row.
#[derive(Debug, Clone, Default)]
pub struct FirstAvailable;

impl<const N: usize> Opponent<N> for FirstAvailable {
    fn choose(&mut self, engine: &Engine<N>) -> Option<Move> {
        let choice = engine.next_move_get();
        debug!(?choice, "FirstAvailable chose move");
        choice
    }

    fn name(&self) -> &str {
        "COM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_available_skips_occupied() {
        let mut engine = Engine::<3>::new();
        engine.play(Move::new(0, 0)).unwrap();
        let mut com = FirstAvailable;
        assert_eq!(com.choose(&engine), Some(Move::new(0, 1)));
    }
}
