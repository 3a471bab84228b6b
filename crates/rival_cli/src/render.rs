//! Text rendering for boards and turn outcomes.

use derive_new::new;
use rival_tictactoe::{Board, Cell, GameStatus, Position, Side};

/// Separator printed between turns.
pub const TURN_RULE: &str = "------------------------------------";

/// Draws boards and status lines using the configured marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Renderer {
    human_mark: char,
    opponent_mark: char,
}

impl Renderer {
    /// Symbol for one cell; empty cells show their index.
    pub fn symbol(&self, cell: Cell, pos: Position) -> String {
        match cell {
            Cell::Human => self.human_mark.to_string(),
            Cell::Opponent => self.opponent_mark.to_string(),
            Cell::Empty => pos.to_index().to_string(),
        }
    }

    /// Three rows separated by rules, indented four spaces.
    pub fn board(&self, board: &Board) -> String {
        let symbols: Vec<String> = board
            .cells()
            .iter()
            .zip(Position::ALL)
            .map(|(&cell, pos)| self.symbol(cell, pos))
            .collect();
        symbols
            .chunks(3)
            .map(|row| format!("    {}", row.join(" | ")))
            .collect::<Vec<_>>()
            .join("\n    ----------\n")
    }

    /// Outcome line for a finished game, or a turn prompt while pending.
    pub fn status(&self, status: GameStatus, to_move: Side) -> String {
        match status.winner() {
            Some(Side::Human) => "Player won!".to_string(),
            Some(Side::Opponent) => "Computer won!".to_string(),
            None if status == GameStatus::Draw => "Tied game".to_string(),
            None => {
                let whose = match to_move {
                    Side::Human => "player",
                    Side::Opponent => "computer",
                };
                format!("{TURN_RULE}\nIt is {whose}'s turn")
            }
        }
    }

    /// Maps one cell token (`1`, `-1`, `0`, a mark or `.`) to a cell.
    pub fn parse_cell(&self, token: &str) -> Option<Cell> {
        let token = token.trim();
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c == self.human_mark => return Some(Cell::Human),
            (Some(c), None) if c == self.opponent_mark => return Some(Cell::Opponent),
            (Some('.'), None) => return Some(Cell::Empty),
            _ => {}
        }
        token.parse::<i8>().ok().and_then(Cell::from_value)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new('O', 'X')
    }
}
