//! Terminal front end for the rival tic-tac-toe opponent.
//!
//! # Architecture
//!
//! - **CLI**: clap argument parsing (`play`, `evaluate`)
//! - **Config**: optional TOML file with marks, opening side and log filter
//! - **Logging**: stderr tracing, filter swapped in once the config is read
//! - **Render**: board and status text
//! - **Orchestrator**: the turn loop, threading `GameState` values

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod evaluate;
pub mod logging;
pub mod orchestrator;
pub mod render;

pub use cli::{Cli, Command};
pub use config::{ConfigError, FirstMove, GameConfig};
pub use orchestrator::Orchestrator;
pub use render::Renderer;
