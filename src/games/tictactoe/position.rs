//! Typed board positions for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Holding a `Position` instead of a raw index means a move can never
/// address a square outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    #[default]
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Cursor movement on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a keypad digit `'1'`-`'9'` into a position.
    #[instrument]
    pub fn from_keypad(c: char) -> Option<Self> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }

    /// Row on the grid (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column on the grid (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Returns the neighbouring position, clamped at the board edge.
    pub fn moved(self, direction: Direction) -> Self {
        let (row, col) = (self.row(), self.col());
        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(2), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(2)),
        };
        Self::ALL[row * 3 + col]
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamps_at_edges() {
        assert_eq!(Position::TopLeft.moved(Direction::Up), Position::TopLeft);
        assert_eq!(Position::TopLeft.moved(Direction::Left), Position::TopLeft);
        assert_eq!(Position::BottomRight.moved(Direction::Down), Position::BottomRight);
        assert_eq!(Position::BottomRight.moved(Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_moves_one_square() {
        assert_eq!(Position::Center.moved(Direction::Up), Position::TopCenter);
        assert_eq!(Position::Center.moved(Direction::Down), Position::BottomCenter);
        assert_eq!(Position::Center.moved(Direction::Left), Position::MiddleLeft);
        assert_eq!(Position::Center.moved(Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_keypad_digits() {
        assert_eq!(Position::from_keypad('1'), Some(Position::TopLeft));
        assert_eq!(Position::from_keypad('5'), Some(Position::Center));
        assert_eq!(Position::from_keypad('9'), Some(Position::BottomRight));
        assert_eq!(Position::from_keypad('0'), None);
        assert_eq!(Position::from_keypad('x'), None);
    }

    #[test]
    fn test_index_round_trip_covers_board() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }
}
