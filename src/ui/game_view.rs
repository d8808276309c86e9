use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::Cell;
use crate::session::GameSession;
use crate::solver::SolveOutcome;

pub fn render(frame: &mut Frame, session: &GameSession, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: ratatui::layout::Rect) {
    let verdict = match session.solution() {
        Some(SolveOutcome::Solved(path)) => format!("Minimum: {} moves", path.len()),
        Some(SolveOutcome::NoSolution) => "No clearing sequence exists".to_string(),
        Some(SolveOutcome::BudgetExhausted { .. }) => "Search budget exhausted".to_string(),
        None => "Solver: off".to_string(),
    };

    let header = Paragraph::new(format!("Moves: {}  |  {}", session.moves(), verdict))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Puzzle League"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, session: &GameSession, area: ratatui::layout::Rect) {
    let cursor = session.cursor();
    let mut lines = Vec::new();

    for (row, cells) in session.board().rows().iter().enumerate() {
        let mut spans = Vec::new();
        for (col, cell) in cells.iter().enumerate() {
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" \u{25cf} ", Color::Red),
                Cell::Green => (" \u{25cf} ", Color::Green),
                Cell::Blue => (" \u{25cf} ", Color::Blue),
                Cell::Purple => (" \u{25cf} ", Color::Magenta),
            };

            let mut style = Style::default().fg(color);
            // Highlight the swappable pair under the cursor.
            if row == cursor.row() && (col == cursor.col() || col == cursor.col() + 1) {
                style = style.bg(Color::Gray).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("Arrows: Move cursor  |  Enter: Swap  |  R: Reset  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
