//! Form rendering module
//!
//! - `field_renderer`: one labeled input plus its inline error
//! - `card`: the centered card holding title, fields, submit button and links

mod card;
mod field_renderer;

pub use card::{card_height, draw_card};
