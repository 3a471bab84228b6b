//! Command-line interface for rival.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rival - play tic-tac-toe against a rule-based opponent
#[derive(Parser, Debug)]
#[command(name = "rival")]
#[command(about = "Play tic-tac-toe against a rule-based opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "rival.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Let the opponent move first, overriding the config file
        #[arg(long)]
        opponent_first: bool,
    },

    /// Evaluate a board and print line sums, status and the opponent's choice
    Evaluate {
        /// Nine comma-separated cells: 1/-1/0, or the configured marks and `.`
        #[arg(allow_hyphen_values = true)]
        cells: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            opponent_first: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::parse_from(["rival"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert_eq!(cli.config, PathBuf::from("rival.toml"));
    }

    #[test]
    fn test_evaluate_accepts_negative_cells() {
        let cli = Cli::parse_from(["rival", "evaluate", "-1,-1,0,0,0,0,0,0,0"]);
        assert_eq!(
            cli.command,
            Some(Command::Evaluate {
                cells: "-1,-1,0,0,0,0,0,0,0".to_string()
            })
        );
    }

    #[test]
    fn test_config_is_global() {
        let cli = Cli::parse_from(["rival", "play", "--opponent-first", "--config", "x.toml"]);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert_eq!(
            cli.command,
            Some(Command::Play {
                opponent_first: true
            })
        );
    }
}
