//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::engine::Engine;
use crate::types::Player;

/// Invariant: Players alternate turns.
///
/// Move history must show the X, O, X, O, ... pattern and the player to move
/// must match the parity of the history length.
pub struct AlternatingTurnInvariant;

impl<const N: usize> Invariant<Engine<N>> for AlternatingTurnInvariant {
    fn holds(engine: &Engine<N>) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        engine.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Placement;
    use crate::types::Move;

    #[test]
    fn test_empty_game_holds() {
        let engine = Engine::<3>::new();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = Engine::<3>::new();
        for (row, column) in [(0, 0), (1, 1), (0, 2), (2, 0), (2, 2)] {
            engine.play(Move::new(row, column)).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut engine = Engine::<3>::new();
        engine.play(Move::new(0, 0)).unwrap();
        engine.history_mut().push(Placement {
            player: Player::X,
            mv: Move::new(1, 1),
        });

        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
