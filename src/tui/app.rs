//! Application state and logic.

use super::input::Action;
use super::toast::ToastQueue;
use crate::config::AppConfig;
use crate::games::tictactoe::{GameEngine, Position, RoundOutcome};
use std::time::Instant;
use tracing::{debug, instrument};

/// Main application state: the engine plus what only the screen cares about.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    toasts: ToastQueue,
    should_quit: bool,
}

impl App {
    /// Creates an application around an idle engine.
    pub fn new(engine: GameEngine, config: &AppConfig) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            toasts: ToastQueue::new(config.toasts().clone()),
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Live toasts.
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the next-round control is offered.
    ///
    /// Hidden until a round has been played, and again after a restart:
    /// an idle engine is inactive with no decided outcome.
    pub fn next_round_available(&self) -> bool {
        self.engine.is_active() || self.engine.outcome().is_over()
    }

    /// One-line description of the current state.
    pub fn status_message(&self) -> String {
        match self.engine.outcome() {
            RoundOutcome::Win(player) => format!("{} wins!", player),
            RoundOutcome::Draw => "It's a draw!".to_string(),
            RoundOutcome::InProgress if self.engine.is_active() => {
                format!("{}'s turn", self.engine.current_turn())
            }
            RoundOutcome::InProgress => "Press S to start a game".to_string(),
        }
    }

    /// Applies a user action, then turns engine notifications into toasts.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Place(position) => {
                self.cursor = position;
                self.engine.apply_move(position);
            }
            Action::PlaceAtCursor => {
                self.engine.apply_move(self.cursor);
            }
            Action::MoveCursor(direction) => {
                self.cursor = self.cursor.moved(direction);
            }
            Action::Start => {
                self.engine.start();
            }
            Action::NextRound => {
                if self.next_round_available() {
                    self.engine.next_round();
                } else {
                    debug!("Next round not available yet");
                }
            }
            Action::Restart => self.engine.restart(),
            Action::ResetStats => self.engine.reset_stats(),
            Action::Quit => self.should_quit = true,
        }

        for notification in self.engine.drain_notifications() {
            self.toasts.push(notification, now);
        }
    }

    /// Expires old toasts.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.prune(now);
    }
}
