//! Turn loop between the human at the terminal and the opponent.

use super::render::Renderer;
use anyhow::{Context, Result, anyhow};
use rival_tictactoe::{GameState, Position, Side};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Drives one game over a line-based reader and a writer.
///
/// The loop owns no game state of its own: each turn takes the current
/// [`GameState`] and produces the next one.
pub struct Orchestrator<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator over the given streams.
    pub fn new(input: R, output: W, renderer: Renderer) -> Self {
        Self {
            input,
            output,
            renderer,
        }
    }

    /// Plays until the game ends or input runs out, returning the last state.
    #[instrument(skip(self))]
    pub fn run(&mut self, first: Side) -> Result<GameState> {
        info!("Starting game");
        writeln!(self.output, "starting the game!")?;

        let mut state = GameState::new(first);
        self.show_board(&state)?;

        while !state.is_over() {
            state = match state.to_move() {
                Side::Human => match self.human_turn(&state)? {
                    Some(next) => next,
                    None => {
                        info!(moves = state.history().len(), "Input closed, abandoning game");
                        return Ok(state);
                    }
                },
                Side::Opponent => self.opponent_turn(&state)?,
            };

            self.show_board(&state)?;
            writeln!(
                self.output,
                "{}",
                self.renderer.status(state.status(), state.to_move())
            )?;
        }

        info!(status = %state.status(), moves = state.history().len(), "Game finished");
        Ok(state)
    }

    /// Prompts until the human names an empty cell. `None` on end of input.
    fn human_turn(&mut self, state: &GameState) -> Result<Option<GameState>> {
        loop {
            write!(self.output, "Which index do you want to place? ")?;
            self.output.flush()?;

            let mut buf = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .context("Failed to read move from input")?;
            if read == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }
            // Bytes that are not UTF-8 become U+FFFD and fail to parse like any other garbage.
            let line = String::from_utf8_lossy(&buf);

            let attempt = Position::parse(&line)
                .and_then(|pos| state.play(pos).map(|next| (pos, next)));
            match attempt {
                Ok((pos, next)) => {
                    debug!(position = %pos, "Human moved");
                    writeln!(self.output, "You chose {}", pos)?;
                    return Ok(Some(next));
                }
                Err(e) => {
                    warn!(error = %e, input = line.trim(), "Rejected human move");
                    writeln!(self.output, "{}. Try again.", e)?;
                }
            }
        }
    }

    fn opponent_turn(&mut self, state: &GameState) -> Result<GameState> {
        let decision = state
            .opponent_move()
            .ok_or_else(|| anyhow!("Opponent has no move on a pending board"))?;
        debug!(position = %decision.position, reason = %decision.reason, "Opponent moved");
        writeln!(self.output, "Computer chose {}", decision.position)?;
        Ok(state.play(decision.position)?)
    }

    fn show_board(&mut self, state: &GameState) -> Result<()> {
        writeln!(self.output, "\n{}\n", self.renderer.board(state.board()))?;
        Ok(())
    }

    /// Consumes the orchestrator and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
