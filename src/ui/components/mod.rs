//! Reusable UI components

mod button;
mod snackbar;

pub use button::{render_button, render_link, BUTTON_HEIGHT};
pub use snackbar::render_snackbar;
