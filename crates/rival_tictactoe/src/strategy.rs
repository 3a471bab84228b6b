//! Rule-based opponent.
//!
//! A single-ply heuristic over the line summary: finish an own line if one
//! is a move away, otherwise block a human line that is a move away,
//! otherwise take the lowest-indexed empty cell. There is no lookahead, so
//! forks beat it.

use super::rules::{Line, NEAR_COMPLETE, compute_line_summary};
use super::{Board, Position, Side};
use serde::Serialize;
use tracing::{debug, instrument};

/// Why the opponent picked its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Reason {
    /// Completes an opponent line.
    #[display("win")]
    Win,
    /// Stops a human line.
    #[display("block")]
    Block,
    /// No line was one move from completion.
    #[display("first open cell")]
    FirstOpen,
}

/// A chosen cell plus the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Rule that selected it.
    pub reason: Reason,
}

/// Picks the opponent's next cell and reports which rule fired.
///
/// Returns `None` only on a full board. Callers are expected to check that
/// the status is pending first.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn decide(board: &Board) -> Option<Decision> {
    let summary = compute_line_summary(board);
    let block_line = summary.first_line_with(Side::Human.sign() * NEAR_COMPLETE);
    let win_line = summary.first_line_with(Side::Opponent.sign() * NEAR_COMPLETE);

    // Own win takes precedence over the block.
    let targeted = win_line
        .map(|line| (line, Reason::Win))
        .or(block_line.map(|line| (line, Reason::Block)));

    let decision = match targeted.and_then(|(line, reason)| open_cell(line, board, reason)) {
        Some(decision) => Some(decision),
        None => Position::ALL
            .into_iter()
            .find(|&pos| board.is_empty(pos))
            .map(|position| Decision {
                position,
                reason: Reason::FirstOpen,
            }),
    };

    debug!(?decision, summary = ?summary.values(), "Opponent decided");
    decision
}

/// Picks the opponent's next cell.
///
/// Equivalent to [`decide`] without the reason.
pub fn choose_move(board: &Board) -> Option<Position> {
    decide(board).map(|decision| decision.position)
}

fn open_cell(line: &Line, board: &Board, reason: Reason) -> Option<Decision> {
    line.first_empty(board)
        .map(|position| Decision { position, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(values: [i8; 9]) -> Board {
        Board::from_values(&values).unwrap()
    }

    #[test]
    fn test_blocks_human_row() {
        let decision = decide(&board([1, 1, 0, 0, 0, 0, 0, 0, 0])).unwrap();
        assert_eq!(decision.position, Position::TopRight);
        assert_eq!(decision.reason, Reason::Block);
    }

    #[test]
    fn test_completes_own_row() {
        let decision = decide(&board([-1, -1, 0, 0, 0, 0, 0, 0, 0])).unwrap();
        assert_eq!(decision.position, Position::TopRight);
        assert_eq!(decision.reason, Reason::Win);
    }

    #[test]
    fn test_win_beats_block() {
        let decision = decide(&board([1, 1, 0, -1, -1, 0, 0, 0, 0])).unwrap();
        assert_eq!(decision.position, Position::MiddleRight);
        assert_eq!(decision.reason, Reason::Win);
    }

    #[test]
    fn test_empty_board_takes_first_cell() {
        let decision = decide(&Board::new()).unwrap();
        assert_eq!(decision.position, Position::TopLeft);
        assert_eq!(decision.reason, Reason::FirstOpen);
    }

    #[test]
    fn test_block_picks_first_empty_in_line_order() {
        // Column [1,4,7]: human at 4 and 7, gap at 1.
        assert_eq!(
            choose_move(&board([-1, 0, 0, 0, 1, 0, 0, 1, 0])),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_fallback_skips_occupied() {
        assert_eq!(
            choose_move(&board([1, -1, 0, 0, 0, 0, 0, 0, 0])),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(choose_move(&board([1, -1, 1, 1, -1, -1, -1, 1, 1])), None);
    }
}
