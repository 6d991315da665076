//! Round-based tic-tac-toe.
//!
//! The library is split into a renderer-agnostic engine and a terminal
//! front end that embeds it.
//!
//! # Architecture
//!
//! - **Games**: board types, win/draw rules and [`GameEngine`], which owns
//!   the round lifecycle and session statistics
//! - **Config**: TOML settings for the first-mover policy and toast timing
//! - **TUI**: ratatui screen that drives the engine from the keyboard
//!
//! # Example
//!
//! ```
//! use tictactoe_rounds::{
//!     FirstMoverPolicy, FixedFirstMover, GameEngine, Player, Position, RoundOutcome,
//! };
//!
//! let mut engine =
//!     GameEngine::with_source(FirstMoverPolicy::KeepFirstMover, FixedFirstMover(Player::X));
//! engine.start();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter, Position::Center] {
//!     engine.apply_move(pos);
//! }
//! assert_eq!(engine.apply_move(Position::TopRight), RoundOutcome::Win(Player::X));
//! assert_eq!(engine.stats().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod tui;

pub mod cli;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, ToastDurations};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardConsistent, Direction, EngineError, Evaluation, FirstMoverPolicy,
    FirstMoverSource, FixedFirstMover, GameEngine, HistoryComplete, LINES, Line, Move,
    Notification, NotificationKind, Player, Position, RandomFirstMover, RoundOutcome,
    ScriptedFirstMover, SessionStats, Square, check_outcome, check_winner, is_full,
};

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, CrosstermMode, LOG_FILE, MAX_TOASTS, TerminalGuard, TerminalMode, Toast,
    ToastQueue, action_for, run_tui,
};
