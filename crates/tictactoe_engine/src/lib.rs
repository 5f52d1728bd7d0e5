//! Tic-tac-toe move engine.
//!
//! Pure game logic with no presentation concerns: the board, the move
//! history of both players, turn order, and the win and draw rules.
//!
//! # Architecture
//!
//! - **Types**: players, cells, moves and game status
//! - **Board**: an `N x N` grid sized at compile time
//! - **Engine**: validates and records moves, tracks whose turn it is
//! - **Rules**: N-in-a-row win detection and draw detection
//! - **Invariants**: properties checked after every accepted move in debug builds
//! - **Opponent**: the seam an automated player plugs into
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, GameStatus, Move, Player};
//!
//! let mut engine: Engine = Engine::new();
//! assert!(engine.move_valid(Move::new(0, 0)));
//!
//! engine.move_set(Move::new(0, 0), Player::X).unwrap();
//! assert!(!engine.move_valid(Move::new(0, 0)));
//!
//! let (x_moves, o_moves) = engine.moves_get();
//! assert_eq!(x_moves, &[Move::new(0, 0)]);
//! assert!(o_moves.is_empty());
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
pub mod invariants;
mod opponent;
pub mod rules;
mod types;

pub use board::Board;
pub use engine::{Engine, Placement};
pub use error::MoveError;
pub use opponent::{FirstAvailable, Opponent};
pub use rules::Line;
pub use types::{Cell, GameStatus, Move, Player};

/// Side length of the classic board.
pub const CLASSIC_SIZE: usize = 3;
