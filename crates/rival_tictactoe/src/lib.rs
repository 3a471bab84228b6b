//! Tic-tac-toe evaluator and rule-based opponent.
//!
//! The board is reduced to eight signed line sums (human +1, opponent -1).
//! Those sums decide the game status and drive the opponent's single-ply
//! heuristic. Everything here is pure: no I/O, no hidden state.
//!
//! # Example
//!
//! ```
//! use rival_tictactoe::{Board, GameStatus, Position, choose_move, compute_status};
//!
//! let board = Board::from_values(&[1, 1, 0, 0, -1, 0, 0, 0, 0]).unwrap();
//! assert_eq!(compute_status(&board), GameStatus::Pending);
//! assert_eq!(choose_move(&board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
mod rules;
mod strategy;
mod types;

pub use error::{BoardError, MoveError};
pub use game::GameState;
pub use position::Position;
pub use rules::{
    COMPLETE, LINES, Line, LineSummary, NEAR_COMPLETE, compute_line_summary, compute_status,
};
pub use strategy::{Decision, Reason, choose_move, decide};
pub use types::{Board, Cell, GameStatus, Side};
