//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are separated from board
//! storage so the engine and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, lines, winning_line};

use crate::board::Board;
use crate::types::GameStatus;
use tracing::instrument;

/// Evaluates the status of a board. A win takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate<const N: usize>(board: &Board<N>) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
