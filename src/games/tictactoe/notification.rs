//! Events the engine emits for the presentation layer to surface.
//!
//! The engine never renders anything itself. Each state change worth
//! telling the user about is queued as a [`Notification`], and whoever
//! embeds the engine drains the queue and decides how to show it.

use super::Player;
use serde::{Deserialize, Serialize};

/// A user-facing event produced by an engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    /// A round began; carries the player who moves first.
    RoundStarted {
        /// Opening player.
        first_mover: Player,
        /// True for the opening round after `start`, false for `next_round`.
        new_game: bool,
    },
    /// A player completed a line.
    Win(Player),
    /// The board filled without a winner.
    Draw,
    /// Session statistics were zeroed.
    StatsReset,
    /// The whole session was reset.
    GameReset,
}

/// Coarse grouping used to pick how long a notification stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// `start` opened a new game.
    NewGame,
    /// `next_round` opened another round.
    NextRound,
    /// A round ended in a win or draw.
    RoundOver,
    /// Statistics were zeroed.
    StatsReset,
    /// Session restarted.
    GameReset,
}

impl Notification {
    /// Which display group this notification belongs to.
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::RoundStarted { new_game: true, .. } => NotificationKind::NewGame,
            Notification::RoundStarted { new_game: false, .. } => NotificationKind::NextRound,
            Notification::Win(_) | Notification::Draw => NotificationKind::RoundOver,
            Notification::StatsReset => NotificationKind::StatsReset,
            Notification::GameReset => NotificationKind::GameReset,
        }
    }

    /// Short headline.
    pub fn title(&self) -> &'static str {
        match self.kind() {
            NotificationKind::NewGame => "New game!",
            NotificationKind::NextRound => "Next round",
            NotificationKind::RoundOver => "Round over",
            NotificationKind::StatsReset => "Statistics reset",
            NotificationKind::GameReset => "Game reset",
        }
    }

    /// One-line detail.
    pub fn description(&self) -> String {
        match self {
            Notification::RoundStarted {
                first_mover,
                new_game: true,
            } => format!("{} goes first", first_mover),
            Notification::RoundStarted {
                first_mover,
                new_game: false,
            } => format!("{} starts this round", first_mover),
            Notification::Win(player) => format!("{} wins!", player),
            Notification::Draw => "It's a draw!".to_string(),
            Notification::StatsReset => "All statistics have been cleared".to_string(),
            Notification::GameReset => "Board and statistics cleared".to_string(),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_started_text() {
        let first = Notification::RoundStarted {
            first_mover: Player::O,
            new_game: true,
        };
        assert_eq!(first.kind(), NotificationKind::NewGame);
        assert_eq!(first.description(), "O goes first");

        let next = Notification::RoundStarted {
            first_mover: Player::X,
            new_game: false,
        };
        assert_eq!(next.kind(), NotificationKind::NextRound);
        assert_eq!(next.to_string(), "Next round: X starts this round");
    }

    #[test]
    fn test_round_over_kinds() {
        assert_eq!(Notification::Win(Player::X).kind(), NotificationKind::RoundOver);
        assert_eq!(Notification::Draw.kind(), NotificationKind::RoundOver);
        assert_eq!(Notification::Win(Player::X).description(), "X wins!");
    }
}
