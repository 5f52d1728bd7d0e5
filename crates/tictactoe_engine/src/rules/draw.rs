//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full<const N: usize>(board: &Board<N>) -> bool {
    board.rows().iter().flatten().all(|cell| !cell.is_empty())
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw<const N: usize>(board: &Board<N>) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Move, Player};

    fn board_from(rows: [&str; 3]) -> Board<3> {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (column, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Occupied(Player::X),
                    'O' => Cell::Occupied(Player::O),
                    _ => Cell::Empty,
                };
                board.set(Move::new(row, column), cell).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::<3>::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(["X..", ".O.", "..."]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = board_from(["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
