//! Button components for TUI

use crate::ui::view::ButtonView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render the filled primary button with border
pub fn render_button(frame: &mut Frame, area: Rect, button: &ButtonView) {
    let border_style = if button.is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    };

    let text_style = if button.is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(Color::Blue)
    };

    let paragraph = Paragraph::new(format!(" {} ", button.label))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(text_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a single-row text link
pub fn render_link(frame: &mut Frame, area: Rect, link: &ButtonView) {
    let style = if link.is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Blue)
    };
    let prefix = if link.is_selected { "▸ " } else { "  " };

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::Cyan)),
        Span::styled(link.label, style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
