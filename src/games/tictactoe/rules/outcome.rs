//! Round evaluation: win, draw, or still in progress.

use super::draw::is_full;
use super::win::{Line, check_winner};
use super::super::{Board, RoundOutcome};
use derive_getters::Getters;
use tracing::instrument;

/// Outcome of a board together with the line that decided it.
///
/// `line` is only set for a win and exists for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Evaluation {
    /// Round outcome.
    outcome: RoundOutcome,
    /// Winning line, when the outcome is a win.
    line: Option<Line>,
}

impl Evaluation {
    /// Evaluation of a board with no completed line.
    pub fn unresolved(outcome: RoundOutcome) -> Self {
        Self { outcome, line: None }
    }
}

/// Evaluates a board.
///
/// The first completed line in row, column, diagonal order wins. A full
/// board with no completed line is a draw; anything else is in progress.
#[instrument(skip(board))]
pub fn check_outcome(board: &Board) -> Evaluation {
    if let Some((player, line)) = check_winner(board) {
        return Evaluation {
            outcome: RoundOutcome::Win(player),
            line: Some(line),
        };
    }

    if is_full(board) {
        Evaluation::unresolved(RoundOutcome::Draw)
    } else {
        Evaluation::unresolved(RoundOutcome::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{LINES, Player, Position, Square};

    fn board_from(marks: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (slot, c) in squares.iter_mut().zip(marks.chars()) {
            *slot = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_in_progress() {
        let eval = check_outcome(&Board::new());
        assert_eq!(*eval.outcome(), RoundOutcome::InProgress);
        assert_eq!(*eval.line(), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let eval = check_outcome(&board_from("XOXOXOOXO"));
        assert_eq!(*eval.outcome(), RoundOutcome::Draw);
        assert_eq!(*eval.line(), None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let eval = check_outcome(&board_from("XXXOOXOXO"));
        assert_eq!(*eval.outcome(), RoundOutcome::Win(Player::X));
        assert_eq!(*eval.line(), Some(LINES[0]));
    }

    #[test]
    fn test_column_win_reports_column() {
        let eval = check_outcome(&board_from(".O..O..O."));
        assert_eq!(*eval.outcome(), RoundOutcome::Win(Player::O));
        let line = eval.line().expect("winning line");
        assert_eq!(
            line.positions(),
            [Position::TopCenter, Position::Center, Position::BottomCenter]
        );
    }
}
