//! Keyboard mapping for the game screen.

use crate::games::tictactoe::{Direction, Position};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the user asked the game screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at a specific square.
    Place(Position),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Start a new game with a random first mover.
    Start,
    /// Clear the board and play another round.
    NextRound,
    /// Reset board and statistics.
    Restart,
    /// Zero the statistics.
    ResetStats,
    /// Leave the application.
    Quit,
}

/// Maps a key event to an action. Releases and repeats are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => Position::from_keypad(c).map(Action::Place),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Start),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::NextRound),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::ResetStats),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
