//! Move engine for tic-tac-toe.
//!
//! The engine owns the board and the move history of both players. It is the
//! only writer of the board, so a cell once occupied stays occupied until
//! [`Engine::reset`].

use crate::board::Board;
use crate::error::MoveError;
use crate::rules::{self, Line};
use crate::types::{Cell, GameStatus, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A move together with the player who made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player making the move.
    pub player: Player,
    /// Where the mark was placed.
    pub mv: Move,
}

/// Tic-tac-toe game engine.
///
/// X always moves first. After each accepted move the turn passes to the
/// opponent and the status is re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine<const N: usize = 3> {
    board: Board<N>,
    to_move: Player,
    status: GameStatus,
    history: Vec<Placement>,
    x_moves: Vec<Move>,
    o_moves: Vec<Move>,
}

impl<const N: usize> Engine<N> {
    /// Creates a new engine with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            x_moves: Vec::new(),
            o_moves: Vec::new(),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        N
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Returns the cell at `mv`, or `None` when out of bounds.
    pub fn cell(&self, mv: Move) -> Option<Cell> {
        self.board.get(mv)
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the round is over this names the player who would have moved next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the round has a winner or ended in a draw.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns the completed line when the round was won.
    pub fn winning_line(&self) -> Option<Line<N>> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Returns every accepted move in play order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Checks whether `mv` is in bounds and targets an empty cell.
    ///
    /// Turn order and game-over are enforced by [`Engine::move_set`].
    #[instrument(skip(self))]
    pub fn move_valid(&self, mv: Move) -> bool {
        mv.in_bounds(N) && self.board.is_empty(mv)
    }

    /// Records `player`'s mark at `mv`.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the engine untouched if the round is over,
    /// the move is out of bounds, the cell is occupied, or it is not
    /// `player`'s turn.
    #[instrument(skip(self))]
    pub fn move_set(&mut self, mv: Move, player: Player) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !mv.in_bounds(N) {
            return Err(MoveError::OutOfBounds { mv, size: N });
        }
        if !self.board.is_empty(mv) {
            return Err(MoveError::CellOccupied(mv));
        }
        if player != self.to_move {
            return Err(MoveError::WrongPlayer(player));
        }

        self.board.set(mv, Cell::Occupied(player))?;
        self.history.push(Placement { player, mv });
        match player {
            Player::X => self.x_moves.push(mv),
            Player::O => self.o_moves.push(mv),
        }
        self.to_move = player.opponent();
        self.status = rules::evaluate(&self.board);

        debug!(status = %self.status, moves = self.history.len(), "Move recorded");
        if self.status.is_over() {
            info!(status = %self.status, "Round finished");
        }

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        Ok(())
    }

    /// Records a move for the player whose turn it is and returns the new status.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::move_set`].
    #[instrument(skip(self))]
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        self.move_set(mv, self.to_move)?;
        Ok(self.status)
    }

    /// Proposes a move for an automated player.
    ///
    /// Returns the first empty cell in row-major order, or `None` when the
    /// board is full or the round is over. No strategy is applied.
    #[instrument(skip(self))]
    pub fn next_move_get(&self) -> Option<Move> {
        if self.status.is_over() {
            return None;
        }
        self.board.empty_cells().next()
    }

    /// Returns the moves of player X and player O, each in play order.
    pub fn moves_get(&self) -> (&[Move], &[Move]) {
        (&self.x_moves, &self.o_moves)
    }

    /// Returns the moves of one player in play order.
    pub fn moves_of(&self, player: Player) -> &[Move] {
        match player {
            Player::X => &self.x_moves,
            Player::O => &self.o_moves,
        }
    }

    /// Clears the board and history and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting board");
        *self = Self::new();
    }
}

#[cfg(test)]
impl<const N: usize> Engine<N> {
    pub(crate) fn board_mut(&mut self) -> &mut Board<N> {
        &mut self.board
    }

    pub(crate) fn history_mut(&mut self) -> &mut Vec<Placement> {
        &mut self.history
    }
}

impl<const N: usize> Default for Engine<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine() {
        let engine = Engine::<3>::new();
        assert_eq!(engine.to_move(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_move_set_rejections_leave_engine_untouched() {
        let mut engine = Engine::<3>::new();
        engine.move_set(Move::new(1, 1), Player::X).unwrap();
        let before = engine.clone();

        assert_eq!(
            engine.move_set(Move::new(1, 1), Player::O),
            Err(MoveError::CellOccupied(Move::new(1, 1)))
        );
        assert_eq!(
            engine.move_set(Move::new(0, 0), Player::X),
            Err(MoveError::WrongPlayer(Player::X))
        );
        assert_eq!(
            engine.move_set(Move::new(3, 1), Player::O),
            Err(MoveError::OutOfBounds {
                mv: Move::new(3, 1),
                size: 3
            })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut engine = Engine::<3>::new();
        for mv in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.play(Move::new(mv.0, mv.1)).unwrap();
        }
        assert_eq!(engine.winner(), Some(Player::X));
        assert_eq!(engine.play(Move::new(2, 2)), Err(MoveError::GameOver));
        assert_eq!(engine.next_move_get(), None);
    }

    #[test]
    fn test_winning_line_reported() {
        let mut engine = Engine::<3>::new();
        for mv in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            engine.play(Move::new(mv.0, mv.1)).unwrap();
        }
        assert_eq!(
            engine.winning_line(),
            Some([Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)])
        );
    }

    #[test]
    fn test_reset() {
        let mut engine = Engine::<3>::new();
        engine.play(Move::new(0, 0)).unwrap();
        engine.reset();
        assert_eq!(engine, Engine::new());
    }
}
