//! Immutable game state threaded through the turn loop.

use super::error::MoveError;
use super::rules::compute_status;
use super::strategy::{Decision, decide};
use super::{Board, GameStatus, Position, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board, status, side to move and move history.
///
/// Every move produces a new value; nothing is updated in place, so a
/// caller can keep any earlier state around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    status: GameStatus,
    to_move: Side,
    history: Vec<Position>,
}

impl GameState {
    /// Starts a game on an empty board with `first` to move.
    #[instrument]
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::Pending,
            to_move: first,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the status as of the last move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the side due to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the positions played so far, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True once the status is terminal.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places the mark of the side to move and returns the resulting state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the status is already terminal.
    /// - [`MoveError::CellOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(side = %self.to_move))]
    pub fn play(&self, position: Position) -> Result<Self, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver(self.status));
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let board = self.board.with(position, self.to_move.mark());
        let status = compute_status(&board);
        let mut history = self.history.clone();
        history.push(position);

        debug!(%status, "Move applied");
        Ok(Self {
            board,
            status,
            to_move: self.to_move.opponent(),
            history,
        })
    }

    /// Same as [`GameState::play`] for a raw index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8, otherwise as `play`.
    pub fn play_index(&self, index: usize) -> Result<Self, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(position)
    }

    /// The opponent's choice, if the game is pending and it is its turn.
    pub fn opponent_move(&self) -> Option<Decision> {
        if self.is_over() || self.to_move != Side::Opponent {
            return None;
        }
        decide(&self.board)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Side::Human)
    }
}
