//! Application state module

mod app_state;
mod forms;
mod navigation;
mod snackbar_state;

pub use app_state::{AppState, Focus, ScreenKind, ScreenState};
pub use forms::{Form, FormPhase};
pub use snackbar_state::SnackbarState;

#[cfg(test)]
pub use forms::FieldName;
