//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Nothing here stores state: the
//! line summary and the status are recomputed from the board on each call.

pub mod lines;

pub use lines::{COMPLETE, LINES, Line, LineSummary, NEAR_COMPLETE, compute_line_summary};

use super::{Board, GameStatus, Side};
use tracing::{debug, instrument};

/// Derives the game status from the board.
///
/// Wins are checked before the draw, and a human win before an opponent
/// win. A board where both sides hold a line cannot arise in play; it is
/// still reported as [`GameStatus::HumanWins`].
#[instrument(skip(board))]
pub fn compute_status(board: &Board) -> GameStatus {
    let summary = compute_line_summary(board);

    let status = if summary.contains(Side::Human.sign() * COMPLETE) {
        GameStatus::HumanWins
    } else if summary.contains(Side::Opponent.sign() * COMPLETE) {
        GameStatus::OpponentWins
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::Pending
    };

    debug!(%status, summary = ?summary.values(), "Board evaluated");
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(values: [i8; 9]) -> Board {
        Board::from_values(&values).unwrap()
    }

    #[test]
    fn test_empty_board_pending() {
        assert_eq!(compute_status(&Board::new()), GameStatus::Pending);
    }

    #[test]
    fn test_human_row() {
        let b = board([0, 0, 0, 1, 1, 1, -1, -1, 0]);
        assert_eq!(compute_status(&b), GameStatus::HumanWins);
    }

    #[test]
    fn test_opponent_diagonal() {
        let b = board([1, 1, -1, 0, -1, 1, -1, 0, 0]);
        assert_eq!(compute_status(&b), GameStatus::OpponentWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board([1, -1, 1, 1, -1, -1, -1, 1, 1]);
        assert_eq!(compute_status(&b), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        // Alternating fill: the main diagonal is all human.
        let b = board([1, -1, 1, -1, 1, -1, -1, 1, 1]);
        assert!(b.is_full());
        assert_eq!(compute_status(&b), GameStatus::HumanWins);
    }

    #[test]
    fn test_both_sides_complete_reports_human() {
        let b = board([1, 1, 1, -1, -1, -1, 0, 0, 0]);
        assert_eq!(compute_status(&b), GameStatus::HumanWins);
    }
}
