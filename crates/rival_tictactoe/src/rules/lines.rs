//! Winning lines and the per-line occupancy summary.
//!
//! Every evaluation reduces the board to eight signed sums, one per line,
//! with human cells counting +1 and opponent cells -1. A sum of ±3 is a
//! completed line; ±2 is a line one move from completion whose third cell
//! must be empty (the only three-cell combination summing to 2 is `1, 1, 0`).

use super::super::{Board, Cell, Position};
use serde::Serialize;
use tracing::instrument;

/// Sum of a line fully held by the human. Negate for the opponent.
pub const COMPLETE: i8 = 3;

/// Sum of a line the human can finish next move. Negate for the opponent.
pub const NEAR_COMPLETE: i8 = 2;

/// Three positions whose joint occupation by one side ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line([Position; 3]);

impl Line {
    const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// Positions on this line, in fixed order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Sum of cell values along this line.
    pub fn sum(&self, board: &Board) -> i8 {
        self.0.iter().map(|&pos| board.get(pos).value()).sum()
    }

    /// First empty position on this line, in line order.
    pub fn first_empty(&self, board: &Board) -> Option<Position> {
        self.0.iter().copied().find(|&pos| board.get(pos) == Cell::Empty)
    }
}

/// The eight lines: rows, then columns, then diagonals.
pub static LINES: [Line; 8] = [
    // Rows
    Line::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Per-line sums, indexed like [`LINES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineSummary([i8; 8]);

impl LineSummary {
    /// Raw sums in line order.
    pub fn values(&self) -> &[i8; 8] {
        &self.0
    }

    /// True if any line sums to `value`.
    pub fn contains(&self, value: i8) -> bool {
        self.0.contains(&value)
    }

    /// Lowest-indexed line summing to `value`.
    pub fn first_line_with(&self, value: i8) -> Option<&'static Line> {
        self.0
            .iter()
            .position(|&sum| sum == value)
            .map(|index| &LINES[index])
    }

    /// Lines paired with their sums.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Line, i8)> + '_ {
        LINES.iter().zip(self.0.iter().copied())
    }
}

/// Computes the sum of every line on the board.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn compute_line_summary(board: &Board) -> LineSummary {
    LineSummary(LINES.map(|line| line.sum(board)))
}
