//! Field rendering utilities for forms

use crate::ui::view::FieldView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input box height in rows
pub const FIELD_HEIGHT: u16 = 3;

/// Rows a field takes, including its error line when present
pub fn field_height(field: &FieldView) -> u16 {
    FIELD_HEIGHT + u16::from(field.error.is_some())
}

/// Draw a form field with its error message underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if field.is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let cursor = if field.is_active { "▌" } else { "" };

    // Cursor sits before the placeholder, after a typed value
    let spans = if field.is_placeholder {
        vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(field.text.as_str(), text_style),
        ]
    } else {
        vec![
            Span::styled(field.text.as_str(), text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    let input_area = Rect {
        height: area.height.min(FIELD_HEIGHT),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    if let Some(error) = field.error {
        if area.height > FIELD_HEIGHT {
            let error_area = Rect {
                y: area.y + FIELD_HEIGHT,
                height: 1,
                ..area
            };
            let line = Line::from(Span::styled(
                format!(" {error}"),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(Paragraph::new(line), error_area);
        }
    }
}
