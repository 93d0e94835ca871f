//! Layout components (centered card, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the card is drawn
const CARD_MAX_WIDTH: u16 = 60;

/// Split the screen into content and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a card of the given height inside `area`, clamped to fit
pub fn centered_card(area: Rect, height: u16) -> Rect {
    let width = area.width.saturating_sub(4).min(CARD_MAX_WIDTH);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Draw key hints and the current screen name
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let hint = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.state.current_screen().label()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
    ];

    let form = &app.state.screen.form;
    match form.phase() {
        FormPhase::Submitted => spans.extend([
            Span::styled("Enter/Esc", key),
            Span::styled(" OK  ", hint),
            Span::styled("Tab/↑↓", key),
            Span::styled(" move", hint),
        ]),
        FormPhase::Editing => spans.extend([
            Span::styled("Tab/↑↓", key),
            Span::styled(" move  ", hint),
            Span::styled("Enter", key),
            Span::styled(" select  ", hint),
            Span::styled(SUBMIT_SHORTCUT, key),
            Span::styled(" submit  ", hint),
            Span::styled("Esc", key),
            Span::styled(" quit", hint),
        ]),
    }

    if form.has_errors() {
        spans.push(Span::styled(
            "  fix highlighted fields",
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
