//! Properties of the line summary and status, checked over every board.

use rival_tictactoe::{Board, Cell, GameStatus, LINES, compute_line_summary, compute_status};

/// Every assignment of {0, 1, -1} to nine cells, reachable or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut n| {
        let mut values = [0i8; 9];
        for value in values.iter_mut() {
            *value = match n % 3 {
                0 => 0,
                1 => 1,
                _ => -1,
            };
            n /= 3;
        }
        Board::from_values(&values).unwrap()
    })
}

fn holds_line(board: &Board, cell: Cell) -> bool {
    LINES
        .iter()
        .any(|line| line.positions().iter().all(|&pos| board.get(pos) == cell))
}

#[test]
fn test_summary_stays_in_range() {
    for board in all_boards() {
        let summary = compute_line_summary(&board);
        assert!(
            summary.values().iter().all(|v| (-3..=3).contains(v)),
            "out of range for {:?}",
            board.values()
        );
    }
}

#[test]
fn test_summary_magnitude_bounded_by_occupied_cells() {
    for board in all_boards() {
        let summary = compute_line_summary(&board);
        for (line, sum) in summary.iter() {
            let occupied = line
                .positions()
                .iter()
                .filter(|&&pos| !board.is_empty(pos))
                .count();
            assert!(usize::from(sum.unsigned_abs()) <= occupied);
        }
    }
}

#[test]
fn test_human_line_always_wins() {
    for board in all_boards().filter(|b| holds_line(b, Cell::Human)) {
        assert_eq!(compute_status(&board), GameStatus::HumanWins);
    }
}

#[test]
fn test_opponent_line_wins_without_human_line() {
    for board in all_boards()
        .filter(|b| holds_line(b, Cell::Opponent) && !holds_line(b, Cell::Human))
    {
        assert_eq!(compute_status(&board), GameStatus::OpponentWins);
    }
}

#[test]
fn test_no_line_full_board_draws_otherwise_pending() {
    for board in all_boards()
        .filter(|b| !holds_line(b, Cell::Human) && !holds_line(b, Cell::Opponent))
    {
        let expected = if board.occupied() == 9 {
            GameStatus::Draw
        } else {
            GameStatus::Pending
        };
        assert_eq!(compute_status(&board), expected, "{:?}", board.values());
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from_values(&[1, -1, 1, 1, -1, -1, -1, 1, 1]).unwrap();
    assert_eq!(compute_status(&board), GameStatus::Draw);
}

#[test]
fn test_full_board_with_diagonal_is_win() {
    let board = Board::from_values(&[1, -1, 1, -1, 1, -1, -1, 1, 1]).unwrap();
    assert_eq!(compute_status(&board), GameStatus::HumanWins);
}
