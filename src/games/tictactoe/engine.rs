//! Round and session state machine for tic-tac-toe.
//!
//! [`GameEngine`] owns the board, whose turn it is, who opened the round,
//! the round outcome and the session statistics. A presentation layer
//! drives it through five operations (`start`, `apply_move`, `next_round`,
//! `restart`, `reset_stats`), reads state back through accessors, and
//! drains [`Notification`]s to show the user what happened.
//!
//! Lifecycle:
//!
//! ```text
//!  new/restart ──start──▶ active ──win/draw──▶ resolved
//!                          ▲  ▲                   │
//!                          │  └────next_round─────┘
//!                          └──────start (any time)
//! ```

use super::action::{EngineError, Move};
use super::coin::{FirstMoverSource, RandomFirstMover};
use super::contracts::assert_invariants;
use super::notification::Notification;
use super::rules::{Line, check_outcome};
use super::stats::SessionStats;
use super::{Board, Player, Position, RoundOutcome, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who opens the round that follows a finished one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FirstMoverPolicy {
    /// The same player opens every round until the next `start`.
    #[default]
    #[serde(rename = "keep")]
    KeepFirstMover,
    /// The opening player swaps after each finished round.
    #[serde(rename = "alternate")]
    AlternateFirstMover,
}

impl FirstMoverPolicy {
    /// Opening player for the round after one opened by `previous`.
    pub fn next_first_mover(self, previous: Player) -> Player {
        match self {
            FirstMoverPolicy::KeepFirstMover => previous,
            FirstMoverPolicy::AlternateFirstMover => previous.opponent(),
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            FirstMoverPolicy::KeepFirstMover => "keep",
            FirstMoverPolicy::AlternateFirstMover => "alternate",
        }
    }
}

/// Tic-tac-toe session engine.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    current_turn: Player,
    first_mover: Player,
    outcome: RoundOutcome,
    winning_line: Option<Line>,
    stats: SessionStats,
    active: bool,
    history: Vec<Move>,
    policy: FirstMoverPolicy,
    source: Box<dyn FirstMoverSource>,
    notifications: Vec<Notification>,
}

impl GameEngine {
    /// Creates an idle engine that picks the opening player at random.
    #[instrument]
    pub fn new(policy: FirstMoverPolicy) -> Self {
        Self::with_source(policy, RandomFirstMover)
    }

    /// Creates an idle engine with an explicit opening-player source.
    #[instrument(skip(source))]
    pub fn with_source(policy: FirstMoverPolicy, source: impl FirstMoverSource + 'static) -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::X,
            first_mover: Player::X,
            outcome: RoundOutcome::InProgress,
            winning_line: None,
            stats: SessionStats::new(),
            active: false,
            history: Vec::new(),
            policy,
            source: Box::new(source),
            notifications: Vec::new(),
        }
    }

    /// Starts a new game with a randomly chosen opening player.
    ///
    /// Allowed in any state. Statistics are kept.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Player {
        let first_mover = self.source.pick();
        self.first_mover = first_mover;
        self.open_round();

        info!(%first_mover, "Game started");
        self.notifications.push(Notification::RoundStarted {
            first_mover,
            new_game: true,
        });
        first_mover
    }

    /// Places the current player's mark at `position`.
    ///
    /// Ignored (returns the unchanged outcome) when the engine is idle, the
    /// round is decided, or the square is taken.
    #[instrument(skip(self), fields(player = %self.current_turn))]
    pub fn apply_move(&mut self, position: Position) -> RoundOutcome {
        if !self.active || self.outcome.is_over() || !self.board.is_empty(position) {
            debug!(
                active = self.active,
                outcome = %self.outcome,
                square = ?self.board.get(position),
                "Move ignored"
            );
            return self.outcome;
        }

        let player = self.current_turn;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        assert_invariants(&self.board, &self.history);

        let evaluation = check_outcome(&self.board);
        self.outcome = *evaluation.outcome();
        match self.outcome {
            RoundOutcome::Win(winner) => {
                self.active = false;
                self.winning_line = *evaluation.line();
                self.stats.record(self.outcome);
                info!(%winner, line = ?self.winning_line, "Round won");
                self.notifications.push(Notification::Win(winner));
            }
            RoundOutcome::Draw => {
                self.active = false;
                self.stats.record(self.outcome);
                info!("Round drawn");
                self.notifications.push(Notification::Draw);
            }
            RoundOutcome::InProgress => {
                self.current_turn = player.opponent();
                debug!(next = %self.current_turn, "Turn passed");
            }
        }
        self.outcome
    }

    /// Places a mark by raw board index (0-8).
    ///
    /// # Errors
    ///
    /// [`EngineError::IndexOutOfRange`] if `index > 8`; nothing changes.
    #[instrument(skip(self))]
    pub fn apply_move_index(&mut self, index: usize) -> Result<RoundOutcome, EngineError> {
        let position = Position::from_index(index).ok_or(EngineError::IndexOutOfRange(index))?;
        Ok(self.apply_move(position))
    }

    /// Clears the board for another round, keeping statistics.
    ///
    /// After a decided round the opening player follows the policy. Called
    /// mid-round (or before any game) it replays the round with the same
    /// opening player.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) -> Player {
        if self.outcome.is_over() {
            self.first_mover = self.policy.next_first_mover(self.first_mover);
        } else {
            debug!(active = self.active, "Round reset before it was decided");
        }
        self.open_round();

        let first_mover = self.first_mover;
        info!(%first_mover, policy = self.policy.label(), "Next round");
        self.notifications.push(Notification::RoundStarted {
            first_mover,
            new_game: false,
        });
        first_mover
    }

    /// Resets the whole session: board, turns and statistics.
    ///
    /// The engine is idle afterwards until `start` is called.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current_turn = Player::X;
        self.first_mover = Player::X;
        self.outcome = RoundOutcome::InProgress;
        self.winning_line = None;
        self.active = false;
        self.stats.reset();

        info!("Session restarted");
        self.notifications.push(Notification::GameReset);
    }

    /// Zeroes the statistics without touching the board.
    #[instrument(skip(self))]
    pub fn reset_stats(&mut self) {
        self.stats.reset();
        info!("Statistics reset");
        self.notifications.push(Notification::StatsReset);
    }

    fn open_round(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current_turn = self.first_mover;
        self.outcome = RoundOutcome::InProgress;
        self.winning_line = None;
        self.active = true;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next move places.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Player who opened the current round.
    pub fn first_mover(&self) -> Player {
        self.first_mover
    }

    /// Outcome of the current round.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Line that won the current round, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Session statistics.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// True while the board accepts moves.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Moves played in the current round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Policy applied by `next_round`.
    pub fn policy(&self) -> FirstMoverPolicy {
        self.policy
    }

    /// Squares a move could currently be placed on.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.active {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Notifications not yet drained.
    pub fn pending_notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Takes every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(FirstMoverPolicy::default())
    }
}
