//! Move validation errors.

use crate::types::{Move, Player};

/// Error that can occur when recording a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move lies outside the board.
    #[display("Move {} is outside the {}x{} board", mv, size, size)]
    OutOfBounds {
        /// The rejected move.
        mv: Move,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The round is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
