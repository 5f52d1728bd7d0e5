//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, Move, Player};
use tracing::instrument;

/// A full row, column or diagonal of cells.
pub type Line<const N: usize> = [Move; N];

/// Every line that wins when filled by one player.
///
/// Rows first, then columns, then the main diagonal and the anti-diagonal.
pub fn lines<const N: usize>() -> impl Iterator<Item = Line<N>> {
    let rows =
        (0..N).map(|row| -> Line<N> { std::array::from_fn(|column| Move::new(row, column)) });
    let columns =
        (0..N).map(|column| -> Line<N> { std::array::from_fn(|row| Move::new(row, column)) });
    let main: Line<N> = std::array::from_fn(|i| Move::new(i, i));
    let anti: Line<N> = std::array::from_fn(|i| Move::new(i, N - 1 - i));
    rows.chain(columns).chain([main, anti])
}

/// Returns the winning player and the line they completed.
#[instrument(skip(board))]
pub fn winning_line<const N: usize>(board: &Board<N>) -> Option<(Player, Line<N>)> {
    if N == 0 {
        return None;
    }

    lines::<N>().find_map(|line| {
        let first = board.get(line[0])?.player()?;
        line.iter()
            .all(|mv| board.get(*mv) == Some(Cell::Occupied(first)))
            .then_some((first, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has filled a line,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner<const N: usize>(board: &Board<N>) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<const N: usize>(board: &mut Board<N>, moves: &[(usize, usize)], player: Player) {
        for &(row, column) in moves {
            board
                .set(Move::new(row, column), Cell::Occupied(player))
                .unwrap();
        }
    }

    #[test]
    fn test_line_count() {
        assert_eq!(lines::<3>().count(), 8);
        assert_eq!(lines::<4>().count(), 10);
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::<3>::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_every_line() {
        for line in lines::<3>() {
            let mut board = Board::<3>::new();
            for mv in line {
                board.set(mv, Cell::Occupied(Player::O)).unwrap();
            }
            assert_eq!(winning_line(&board), Some((Player::O, line)));
        }
    }

    #[test]
    fn test_winner_every_line_four_by_four() {
        for line in lines::<4>() {
            let mut board = Board::<4>::new();
            let (last, rest) = line.split_last().unwrap();
            for mv in rest {
                board.set(*mv, Cell::Occupied(Player::X)).unwrap();
            }
            assert_eq!(check_winner(&board), None, "three of {line:?}");

            board.set(*last, Cell::Occupied(Player::X)).unwrap();
            assert_eq!(winning_line(&board), Some((Player::X, line)));
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::<3>::new();
        fill(&mut board, &[(0, 2), (1, 1), (2, 0)], Player::X);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::<3>::new();
        fill(&mut board, &[(0, 0), (0, 1)], Player::X);
        fill(&mut board, &[(0, 2)], Player::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_four_by_four_needs_four() {
        let mut board = Board::<4>::new();
        fill(&mut board, &[(3, 0), (3, 1), (3, 2)], Player::X);
        assert_eq!(check_winner(&board), None);
        fill(&mut board, &[(3, 3)], Player::X);
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
