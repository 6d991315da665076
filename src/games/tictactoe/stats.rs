//! Cumulative results across the rounds of a session.

use super::{Player, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Win and draw counters for a session.
///
/// Counters only grow until [`SessionStats::reset`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl SessionStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Rounds that ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Total rounds completed.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Counts a finished round. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win(Player::X) => self.x_wins += 1,
            RoundOutcome::Win(Player::O) => self.o_wins += 1,
            RoundOutcome::Draw => self.draws += 1,
            RoundOutcome::InProgress => {}
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
