//! Consistency checks run after every accepted move in debug builds.

use super::{Board, Move, Player, Square};
use tracing::{instrument, warn};

/// Invariant: mark counts differ by at most one.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the invariant.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: the round's move history matches the occupied squares.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Checks the invariant.
    #[instrument(skip(board, history))]
    pub fn holds(board: &Board, history: &[Move]) -> bool {
        let filled = board.squares().iter().filter(|s| **s != Square::Empty).count();
        let valid = filled == history.len()
            && history
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.player));
        if !valid {
            warn!(filled, history_len = history.len(), "History completeness violated");
        }
        valid
    }
}

/// Asserts that all board invariants hold (panic on violation in debug builds).
#[instrument(skip(board, history))]
pub fn assert_invariants(board: &Board, history: &[Move]) {
    debug_assert!(BoardConsistent::holds(board), "Board consistency violated");
    debug_assert!(HistoryComplete::holds(board, history), "History completeness violated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_consistent_board() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        assert!(BoardConsistent::holds(&board));
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!BoardConsistent::holds(&board));
    }

    #[test]
    fn test_history_must_match_board() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let history = vec![Move::new(Player::X, Position::Center)];
        assert!(HistoryComplete::holds(&board, &history));

        let wrong = vec![Move::new(Player::O, Position::Center)];
        assert!(!HistoryComplete::holds(&board, &wrong));
        assert!(!HistoryComplete::holds(&board, &[]));
    }
}
