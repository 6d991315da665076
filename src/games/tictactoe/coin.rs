//! Sources for choosing who opens a round.

use super::Player;
use rand::Rng;
use tracing::instrument;

/// Picks the player who moves first when a game starts.
pub trait FirstMoverSource: std::fmt::Debug {
    /// Returns the opening player.
    fn pick(&mut self) -> Player;
}

/// Fair coin flip backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFirstMover;

impl FirstMoverSource for RandomFirstMover {
    #[instrument]
    fn pick(&mut self) -> Player {
        if rand::thread_rng().gen_bool(0.5) {
            Player::X
        } else {
            Player::O
        }
    }
}

/// Always picks the same player.
#[derive(Debug, Clone, Copy)]
pub struct FixedFirstMover(pub Player);

impl FirstMoverSource for FixedFirstMover {
    fn pick(&mut self) -> Player {
        self.0
    }
}

/// Replays a fixed sequence of picks, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedFirstMover {
    picks: Vec<Player>,
    next: usize,
}

impl ScriptedFirstMover {
    /// Creates a source that yields `picks` in order, then repeats.
    ///
    /// An empty script always yields X.
    pub fn new(picks: impl Into<Vec<Player>>) -> Self {
        Self {
            picks: picks.into(),
            next: 0,
        }
    }
}

impl FirstMoverSource for ScriptedFirstMover {
    fn pick(&mut self) -> Player {
        if self.picks.is_empty() {
            return Player::X;
        }
        let player = self.picks[self.next % self.picks.len()];
        self.next += 1;
        player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_wraps() {
        let mut source = ScriptedFirstMover::new([Player::O, Player::X]);
        assert_eq!(source.pick(), Player::O);
        assert_eq!(source.pick(), Player::X);
        assert_eq!(source.pick(), Player::O);
    }

    #[test]
    fn test_random_yields_both_players() {
        let mut source = RandomFirstMover;
        let picks: Vec<Player> = (0..256).map(|_| source.pick()).collect();
        assert!(picks.contains(&Player::X));
        assert!(picks.contains(&Player::O));
    }
}
