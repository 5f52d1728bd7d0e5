//! History consistency invariant: per-player move lists agree with the history.

use super::Invariant;
use crate::engine::Engine;
use crate::types::{Move, Player};

/// Invariant: The per-player move lists are the interleaved history split by
/// player, and the board holds exactly one mark per recorded move.
pub struct HistoryConsistentInvariant;

impl<const N: usize> Invariant<Engine<N>> for HistoryConsistentInvariant {
    fn holds(engine: &Engine<N>) -> bool {
        let split = |player: Player| -> Vec<Move> {
            engine
                .history()
                .iter()
                .filter(|placement| placement.player == player)
                .map(|placement| placement.mv)
                .collect()
        };

        [Player::X, Player::O]
            .into_iter()
            .all(|player| engine.moves_of(player) == split(player).as_slice())
            && engine.board().occupied() == engine.history().len()
    }

    fn description() -> &'static str {
        "Per-player moves match the history and the board"
    }
}
