//! Rival - play tic-tac-toe against a rule-based opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rival_cli::{Cli, Command, FirstMove, GameConfig, Orchestrator, Renderer, evaluate, logging};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let log = logging::initialize_tracing(std::env::var("RUST_LOG").ok());
    let config = GameConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    log.apply_config(config.log_filter())?;
    info!("Rival tracing initialized");

    let renderer = Renderer::new(*config.human_mark(), *config.opponent_mark());
    match cli.command.unwrap_or_default() {
        Command::Play { opponent_first } => {
            let config = if opponent_first {
                config.with_first(FirstMove::Opponent)
            } else {
                config
            };
            run_play(&config, renderer)
        }
        Command::Evaluate { cells } => run_evaluate(&cells, renderer),
    }
}

/// Play one interactive game on stdin/stdout.
#[instrument(skip_all, fields(first = ?config.first()))]
fn run_play(config: &GameConfig, renderer: Renderer) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut orchestrator = Orchestrator::new(stdin.lock(), stdout.lock(), renderer);

    let state = orchestrator.run((*config.first()).into())?;
    info!(status = %state.status(), "Session over");
    Ok(())
}

/// Print the evaluation of a single board.
#[instrument(skip(renderer))]
fn run_evaluate(cells: &str, renderer: Renderer) -> Result<()> {
    let board = evaluate::parse_board(cells, &renderer)?;
    println!("{}", evaluate::report(&board, &renderer));
    Ok(())
}
