//! Confirmation snackbar component

use crate::ui::view::SnackbarView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Snackbar height in rows (borders + one message line)
pub const SNACKBAR_HEIGHT: u16 = 3;

/// Render the snackbar along the bottom of `area`, sliding up as it appears
pub fn render_snackbar(frame: &mut Frame, area: Rect, snackbar: &SnackbarView) {
    let Some(snackbar_area) = slide_area(area, snackbar.progress) else {
        return;
    };

    // Clear the area behind the snackbar
    frame.render_widget(Clear, snackbar_area);

    let action = format!(" {} ", snackbar.action);
    let inner_width = snackbar_area.width.saturating_sub(2) as usize;
    let message_width = inner_width.saturating_sub(action.chars().count() + 1);
    let message = truncate_string(snackbar.message, message_width);
    let gap = inner_width
        .saturating_sub(message.chars().count() + action.chars().count())
        .max(1);

    let content = Line::from(vec![
        Span::styled(message, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(gap)),
        Span::styled(
            action,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let snackbar_widget = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(snackbar_widget, snackbar_area);
}

/// Rows of `area` covered by the snackbar at a given slide progress
fn slide_area(area: Rect, progress: f32) -> Option<Rect> {
    let visible = (f32::from(SNACKBAR_HEIGHT) * progress.clamp(0.0, 1.0)).round() as u16;
    let height = visible.min(area.height);
    if height == 0 || area.width < 4 {
        return None;
    }
    Some(Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    })
}

/// Truncate a string to a maximum length with ellipsis
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_area_hidden_at_start() {
        let area = Rect::new(0, 0, 40, 20);
        assert!(slide_area(area, 0.0).is_none());
    }

    #[test]
    fn test_slide_area_full_at_end() {
        let area = Rect::new(2, 1, 40, 20);
        assert_eq!(slide_area(area, 1.0), Some(Rect::new(2, 18, 40, 3)));
    }

    #[test]
    fn test_slide_area_grows_from_bottom() {
        let area = Rect::new(0, 0, 40, 20);
        let partial = slide_area(area, 0.5).unwrap();
        assert_eq!(partial.y + partial.height, 20);
        assert!(partial.height < SNACKBAR_HEIGHT);
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("récupération", 8), "récup...");
    }
}
