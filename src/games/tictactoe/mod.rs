//! Tic-tac-toe: board types, rules and the round/session engine.

mod action;
mod coin;
mod contracts;
mod engine;
mod notification;
mod position;
pub mod rules;
mod stats;
mod types;

pub use action::{EngineError, Move};
pub use coin::{FirstMoverSource, FixedFirstMover, RandomFirstMover, ScriptedFirstMover};
pub use contracts::{BoardConsistent, HistoryComplete};
pub use engine::{FirstMoverPolicy, GameEngine};
pub use notification::{Notification, NotificationKind};
pub use position::{Direction, Position};
pub use rules::{Evaluation, LINES, Line, check_outcome, check_winner, is_full};
pub use stats::SessionStats;
pub use types::{Board, Player, RoundOutcome, Square};
