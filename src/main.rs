//! tictactoe_rounds - terminal tic-tac-toe with session statistics.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_rounds::cli::{Cli, Command};
use tictactoe_rounds::{AppConfig, run_tui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, policy } => {
            let mut app_config = AppConfig::load_or_default(&config)
                .with_context(|| format!("Loading {}", config.display()))?;
            if let Some(policy) = policy {
                app_config = app_config.with_policy(policy.into());
            }
            run_tui(app_config)
        }
        Command::Config { config } => {
            let app_config = AppConfig::load_or_default(&config)
                .with_context(|| format!("Loading {}", config.display()))?;
            print!("{}", app_config.to_toml()?);
            Ok(())
        }
    }
}
