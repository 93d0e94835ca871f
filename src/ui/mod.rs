//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
pub mod view;

use crate::app::App;
use crate::state::SnackbarState;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    let progress = app
        .state
        .snackbar
        .as_ref()
        .map_or(1.0, SnackbarState::progress);
    let card = view::build_card(&app.state.screen, app.state.mask_passwords, progress);

    let card_area = layout::centered_card(content_area, forms::card_height(&card));
    forms::draw_card(frame, card_area, &card);

    // Snackbar floats at the bottom of the card's column
    if let Some(snackbar) = &card.snackbar {
        let column = Rect {
            x: card_area.x,
            width: card_area.width,
            ..content_area
        };
        components::render_snackbar(frame, column, snackbar);
    }

    layout::draw_status_bar(frame, status_area, app);
}
