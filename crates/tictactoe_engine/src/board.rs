//! Square board storage.

use crate::error::MoveError;
use crate::types::{Cell, Move, Player};

/// `N x N` tic-tac-toe board.
///
/// The size is fixed at compile time. Writes go through the engine, which
/// guarantees a cell is only ever written while empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = 3> {
    /// Cells in row-major order.
    cells: [[Cell; N]; N],
}

impl<const N: usize> Board<N> {
    /// Side length of the board.
    pub const SIZE: usize = N;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Gets the cell at the given move, or `None` when out of bounds.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.column).copied()
    }

    /// Sets the cell at the given move.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) -> Result<(), MoveError> {
        let slot = self
            .cells
            .get_mut(mv.row)
            .and_then(|row| row.get_mut(mv.column))
            .ok_or(MoveError::OutOfBounds { mv, size: N })?;
        *slot = cell;
        Ok(())
    }

    /// Checks if the cell at `mv` exists and is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Iterates over every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, cell)| (Move::new(row, column), *cell))
        })
    }

    /// Iterates over the empty cells, row by row.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(mv, _)| mv)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.iter().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let separator = vec!["-"; N].join("+");
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => ".",
                        Cell::Occupied(Player::X) => "X",
                        Cell::Occupied(Player::O) => "O",
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", separator))
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}
