//! Error types for board construction and move application.

use super::position::Position;
use super::types::GameStatus;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell at the position is already taken.
    #[display("Position {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already reached a terminal status.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// Input was neither an index nor a position label.
    #[display("Cannot read {:?} as a position", _0)]
    Unparseable(String),
}

impl std::error::Error for MoveError {}

/// Error building a board from raw cell values.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A board needs exactly nine cells.
    #[display("Expected 9 cells, got {}", _0)]
    WrongLength(usize),

    /// Cell values must be 1, -1 or 0.
    #[display("Cell {} has value {}, expected 1, -1 or 0", index, value)]
    InvalidValue {
        /// Offending cell index.
        index: usize,
        /// Value found there.
        value: i8,
    },
}

impl std::error::Error for BoardError {}
