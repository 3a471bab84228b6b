//! Core domain types for tic-tac-toe.

use super::error::BoardError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One of the two sides at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The person at the keyboard. Moves first by default.
    Human,
    /// The rule-based opponent.
    Opponent,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }

    /// The cell this side writes when it moves.
    pub fn mark(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Opponent => Cell::Opponent,
        }
    }

    /// Sign of this side's contribution to a line sum (+1 human, -1 opponent).
    pub fn sign(self) -> i8 {
        self.mark().value()
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Held by the human.
    Human,
    /// Held by the opponent.
    Opponent,
}

impl Cell {
    /// Numeric value used by line sums.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Human => 1,
            Cell::Opponent => -1,
        }
    }

    /// Inverse of [`Cell::value`].
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Human),
            -1 => Some(Cell::Opponent),
            _ => None,
        }
    }

    /// Returns true for [`Cell::Empty`].
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 board, cells in row-major order (0-8).
///
/// Boards are small `Copy` values. Placing a mark produces a new board
/// through [`Board::with`]; nothing in this crate mutates a board it was
/// handed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an explicit cell array.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Builds a board from numeric cell values (1 human, -1 opponent, 0 empty).
    pub fn from_values(values: &[i8]) -> Result<Self, BoardError> {
        if values.len() != 9 {
            return Err(BoardError::WrongLength(values.len()));
        }
        let mut cells = [Cell::Empty; 9];
        for (index, (&value, cell)) in values.iter().zip(cells.iter_mut()).enumerate() {
            *cell = Cell::from_value(value).ok_or(BoardError::InvalidValue { index, value })?;
        }
        Ok(Self { cells })
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns a copy of this board with `cell` written at `pos`.
    #[must_use]
    pub fn with(&self, pos: Position, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[pos.to_index()] = cell;
        next
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Numeric values of all cells, in index order.
    pub fn values(&self) -> [i8; 9] {
        self.cells.map(Cell::value)
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Checks if every cell is taken.
    pub fn is_full(&self) -> bool {
        self.occupied() == self.cells.len()
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// The human holds a full line.
    #[display("human wins")]
    HumanWins,
    /// The opponent holds a full line.
    #[display("opponent wins")]
    OpponentWins,
    /// Board full, no line held.
    #[display("draw")]
    Draw,
    /// Moves remain and nobody has won.
    #[display("pending")]
    Pending,
}

impl GameStatus {
    /// True for every status except [`GameStatus::Pending`].
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Pending
    }

    /// Winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::HumanWins => Some(Side::Human),
            GameStatus::OpponentWins => Some(Side::Opponent),
            GameStatus::Draw | GameStatus::Pending => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_values_round_trip() {
        for cell in [Cell::Empty, Cell::Human, Cell::Opponent] {
            assert_eq!(Cell::from_value(cell.value()), Some(cell));
        }
        assert_eq!(Cell::from_value(2), None);
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        assert_eq!(
            Board::from_values(&[0; 8]),
            Err(BoardError::WrongLength(8))
        );
    }

    #[test]
    fn test_from_values_rejects_bad_value() {
        let result = Board::from_values(&[0, 0, 0, 0, 5, 0, 0, 0, 0]);
        assert_eq!(result, Err(BoardError::InvalidValue { index: 4, value: 5 }));
    }

    #[test]
    fn test_with_returns_new_board() {
        let board = Board::new();
        let next = board.with(Position::Center, Cell::Human);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Human);
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_side_signs() {
        assert_eq!(Side::Human.sign(), 1);
        assert_eq!(Side::Opponent.sign(), -1);
        assert_eq!(Side::Human.opponent(), Side::Opponent);
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::HumanWins.winner(), Some(Side::Human));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(!GameStatus::Pending.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }
}
