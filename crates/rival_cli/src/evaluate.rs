//! One-shot board evaluation for the `evaluate` subcommand.

use super::render::Renderer;
use anyhow::{Result, bail};
use rival_tictactoe::{Board, Cell, GameStatus, compute_line_summary, compute_status, decide};
use tracing::instrument;

/// Parses nine comma-separated cell tokens into a board.
#[instrument(skip(renderer))]
pub fn parse_board(input: &str, renderer: &Renderer) -> Result<Board> {
    let tokens: Vec<&str> = input.split(',').collect();
    if tokens.len() != 9 {
        bail!("Expected 9 comma-separated cells, got {}", tokens.len());
    }

    let mut cells = [Cell::Empty; 9];
    for (index, (token, cell)) in tokens.iter().zip(cells.iter_mut()).enumerate() {
        *cell = match renderer.parse_cell(token) {
            Some(parsed) => parsed,
            None => bail!("Cell {} has unrecognised value {:?}", index, token.trim()),
        };
    }
    Ok(Board::from_cells(cells))
}

/// Multi-line report: the board, the eight line sums, the status and, while
/// pending, the opponent's reply.
pub fn report(board: &Board, renderer: &Renderer) -> String {
    let summary = compute_line_summary(board);
    let status = compute_status(board);

    let mut lines = vec![
        renderer.board(board),
        format!("lines: {:?}", summary.values()),
        format!("status: {status}"),
    ];
    if status == GameStatus::Pending
        && let Some(decision) = decide(board)
    {
        lines.push(format!(
            "opponent: {} ({})",
            decision.position, decision.reason
        ));
    }
    lines.join("\n")
}
