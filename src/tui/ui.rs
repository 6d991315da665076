//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::App;
use super::toast::{MAX_TOASTS, Toast};
use crate::games::tictactoe::{NotificationKind, Player, Position, RoundOutcome, Square};

const TOAST_WIDTH: u16 = 36;
const TOAST_HEIGHT: u16 = 4;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Body
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(11)])
        .split(body[0]);
    draw_status(frame, left[0], app);
    draw_board(frame, left[1], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(body[1]);
    draw_stats(frame, right[0], app);
    draw_instructions(frame, right[1]);

    draw_help(frame, chunks[2], app);
    draw_toasts(frame, area, app);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let color = match engine.outcome() {
        RoundOutcome::Win(player) => player_color(player),
        RoundOutcome::Draw => Color::Gray,
        RoundOutcome::InProgress if engine.is_active() => player_color(engine.current_turn()),
        RoundOutcome::InProgress => Color::Yellow,
    };

    let mut spans = vec![Span::styled(
        app.status_message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if engine.is_active() || engine.outcome().is_over() {
        spans.push(Span::styled(
            format!("   (first: {})", engine.first_mover()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game status"));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, positions);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (col, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], app, *pos);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.engine();

    let (symbol, mut style) = match engine.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.symbol().to_string(),
            Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
        ),
    };

    if engine.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if engine.is_active() && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled("       ", style)),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
        Line::from(Span::styled("       ", style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("───────┼───────┼───────").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.engine().stats();
    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let wins = |player: Player| {
        Span::styled(
            format!("{} wins: {:<4}", player, stats.wins(player)),
            bold(player_color(player)),
        )
    };

    let lines = vec![
        Line::from(vec![
            wins(Player::X),
            Span::styled(format!("Draws: {:<4}", stats.draws()), bold(Color::Gray)),
            wins(Player::O),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Total games: {}", stats.total()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Next-round rule: {}", app.engine().policy().label()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Statistics (C: reset)"));
    frame.render_widget(paragraph, area);
}

fn draw_instructions(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from("• Press S to start a game"),
        Line::from("• The first player is chosen at random"),
        Line::from("• Press 1-9 or Enter on a square to move"),
        Line::from("• Get three in a row to win"),
        Line::from("• Press N to play another round"),
    ];
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("How to play"));
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let mut help = String::from("S: Start | 1-9/Arrows+Enter: Move");
    if app.next_round_available() {
        help.push_str(" | N: Next round");
    }
    help.push_str(" | R: Restart | C: Reset stats | Q: Quit");

    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_toasts(frame: &mut Frame, area: Rect, app: &App) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);

    for (i, toast) in app.toasts().visible().take(MAX_TOASTS).enumerate() {
        let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        draw_toast(frame, rect, toast);
    }
}

fn draw_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let accent = match toast.kind {
        NotificationKind::NewGame | NotificationKind::NextRound => Color::Cyan,
        NotificationKind::RoundOver => Color::Green,
        NotificationKind::StatsReset | NotificationKind::GameReset => Color::Yellow,
    };

    let paragraph = Paragraph::new(toast.description.as_str())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(Span::styled(
                    toast.title.as_str(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::games::tictactoe::{FirstMoverPolicy, FixedFirstMover, GameEngine};
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_idle_screen_prompts_start() {
        let engine =
            GameEngine::with_source(FirstMoverPolicy::KeepFirstMover, FixedFirstMover(Player::O));
        let app = App::new(engine, &AppConfig::default());
        let screen = rendered(&app);
        assert!(screen.contains("Press S to start a game"));
        assert!(!screen.contains("N: Next round"));
    }

    #[test]
    fn test_started_screen_shows_turn_and_toast() {
        let engine =
            GameEngine::with_source(FirstMoverPolicy::KeepFirstMover, FixedFirstMover(Player::O));
        let mut app = App::new(engine, &AppConfig::default());
        app.handle_action(Action::Start, Instant::now());
        let screen = rendered(&app);
        assert!(screen.contains("O's turn"));
        assert!(screen.contains("O goes first"));
        assert!(screen.contains("N: Next round"));
    }

    #[test]
    fn test_stats_card_counts_wins_per_player() {
        let engine =
            GameEngine::with_source(FirstMoverPolicy::KeepFirstMover, FixedFirstMover(Player::O));
        let mut app = App::new(engine, &AppConfig::default());
        let now = Instant::now();
        app.handle_action(Action::Start, now);
        for key in ['1', '4', '2', '5', '3'] {
            let pos = Position::from_keypad(key).expect("keypad digit");
            app.handle_action(Action::Place(pos), now);
        }
        app.tick(now + Duration::from_secs(60));
        assert!(app.toasts().is_empty());

        let screen = rendered(&app);
        assert!(screen.contains("O wins: 1"));
        assert!(screen.contains("X wins: 0"));
        assert!(screen.contains("Total games: 1"));
    }
}
