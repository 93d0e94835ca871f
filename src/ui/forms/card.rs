//! Screen card rendering

use super::field_renderer::{draw_field, field_height};
use crate::ui::components::{render_button, render_link, BUTTON_HEIGHT};
use crate::ui::view::CardView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows above the fields: title, optional subtitle, blank line
fn header_height(card: &CardView) -> u16 {
    2 + u16::from(card.subtitle.is_some())
}

/// Total rows the card needs, borders and padding included
pub fn card_height(card: &CardView) -> u16 {
    let fields: u16 = card.fields.iter().map(field_height).sum();
    let links = card.links.len() as u16;
    // borders (2) + top/bottom padding (2) + gap before submit (1)
    5 + header_height(card) + fields + BUTTON_HEIGHT + links
}

/// Draw the card into `area`
pub fn draw_card(frame: &mut Frame, area: Rect, card: &CardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(header_height(card))];
    constraints.extend(
        card.fields
            .iter()
            .map(|field| Constraint::Length(field_height(field))),
    );
    constraints.push(Constraint::Length(1)); // Gap
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.extend(card.links.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0)); // Remaining space

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(2)
        .vertical_margin(1)
        .split(inner);

    draw_header(frame, chunks[0], card);

    let mut index = 1;
    for field in &card.fields {
        draw_field(frame, chunks[index], field);
        index += 1;
    }

    index += 1; // Gap
    render_button(frame, chunks[index], &card.submit);
    index += 1;

    for link in &card.links {
        render_link(frame, chunks[index], link);
        index += 1;
    }
}

fn draw_header(frame: &mut Frame, area: Rect, card: &CardView) {
    let mut lines = vec![Line::from(Span::styled(
        card.title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = card.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::Gray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
