//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::board::Board;
use crate::engine::Engine;
use crate::types::Cell;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Once a cell transitions from Empty to Occupied, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl<const N: usize> Invariant<Engine<N>> for MonotonicBoardInvariant {
    fn holds(engine: &Engine<N>) -> bool {
        let mut reconstructed = Board::<N>::new();

        for placement in engine.history() {
            if !reconstructed.is_empty(placement.mv) {
                return false;
            }
            if reconstructed
                .set(placement.mv, Cell::Occupied(placement.player))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Placement;
    use crate::types::{Move, Player};

    #[test]
    fn test_empty_game_holds() {
        let engine = Engine::<3>::new();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut engine = Engine::<3>::new();
        for (row, column) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            engine.play(Move::new(row, column)).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut engine = Engine::<3>::new();
        engine.play(Move::new(1, 1)).unwrap();

        engine
            .board_mut()
            .set(Move::new(1, 1), Cell::Occupied(Player::O))
            .unwrap();

        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut engine = Engine::<3>::new();
        engine.play(Move::new(1, 1)).unwrap();
        engine.history_mut().push(Placement {
            player: Player::O,
            mv: Move::new(1, 1),
        });

        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
