//! Command-line interface for tictactoe_rounds.

use crate::games::tictactoe::FirstMoverPolicy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with a random first mover and running session statistics
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rounds")]
#[command(about = "Round-based tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe_rounds.toml")]
        config: PathBuf,

        /// Who opens the next round, overriding the config file
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a TOML config file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe_rounds.toml")]
        config: PathBuf,
    },
}

/// First-mover policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// The same player opens every round
    Keep,
    /// The opening player swaps after each round
    Alternate,
}

impl From<PolicyArg> for FirstMoverPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Keep => FirstMoverPolicy::KeepFirstMover,
            PolicyArg::Alternate => FirstMoverPolicy::AlternateFirstMover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_with_policy() {
        let cli = Cli::parse_from(["tictactoe_rounds", "play", "--policy", "alternate"]);
        match cli.command {
            Command::Play { config, policy } => {
                assert_eq!(config, PathBuf::from("tictactoe_rounds.toml"));
                assert_eq!(policy, Some(PolicyArg::Alternate));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_policy_conversion() {
        assert_eq!(
            FirstMoverPolicy::from(PolicyArg::Keep),
            FirstMoverPolicy::KeepFirstMover
        );
        assert_eq!(
            FirstMoverPolicy::from(PolicyArg::Alternate),
            FirstMoverPolicy::AlternateFirstMover
        );
    }
}
