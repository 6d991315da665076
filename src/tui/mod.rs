//! Terminal UI for tic-tac-toe rounds.

mod app;
mod input;
mod terminal;
mod toast;
mod ui;

pub use app::App;
pub use input::{Action, action_for};
pub use terminal::{CrosstermMode, TerminalGuard, TerminalMode};
pub use toast::{MAX_TOASTS, Toast, ToastQueue};

use crate::config::AppConfig;
use crate::games::tictactoe::GameEngine;
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tracing::{error, info, instrument};

/// Log file used while the terminal is owned by the UI.
pub const LOG_FILE: &str = "tictactoe_rounds.log";

/// Run the TUI until the user quits.
pub fn run_tui(config: AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(LOG_FILE).context("Failed to create log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(policy = config.first_mover_policy().label(), "Starting tic-tac-toe TUI");

    terminal::install_panic_hook();
    // Declared before the terminal so it is dropped after it.
    let _guard = TerminalGuard::enter(CrosstermMode).context("Failed to prepare terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let engine = GameEngine::new(*config.first_mover_policy());
    let app = App::new(engine, &config);
    let res = run_app(&mut terminal, app, &config);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw/poll loop.
#[instrument(skip_all)]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    config: &AppConfig,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let tick_rate = config.tick_rate();

    while !app.should_quit() {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key)
        {
            app.handle_action(action, Instant::now());
        }
    }

    Ok(())
}
