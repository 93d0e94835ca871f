//! Application state definitions

use super::forms::{FieldName, Form, FormState, SubmitOutcome};
use super::navigation::{PendingRoute, Router};
use super::snackbar_state::SnackbarState;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenKind {
    #[default]
    Login,
    SignUp,
    ForgotPassword,
}

impl ScreenKind {
    #[cfg(test)]
    pub const ALL: [ScreenKind; 3] = [Self::Login, Self::SignUp, Self::ForgotPassword];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SignUp => "Sign Up",
            Self::ForgotPassword => "Forgot Password",
        }
    }
}

/// What keyboard focus is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Submit,
    Link(usize),
}

/// One shown screen: its kind, its form and the focused slot.
///
/// Slots are the form fields in order, then the submit button, then the links.
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub kind: ScreenKind,
    pub form: FormState,
    pub active_slot: usize,
}

impl ScreenState {
    pub fn new(kind: ScreenKind) -> Self {
        Self {
            kind,
            form: FormState::for_screen(kind),
            active_slot: 0,
        }
    }

    pub fn focus(&self) -> Focus {
        let fields = self.form.fields().len();
        match self.active_slot {
            i if i < fields => Focus::Field(i),
            i if i == fields => Focus::Submit,
            i => Focus::Link(i - fields - 1),
        }
    }

    /// Field under the cursor, if focus is on a field
    pub fn focused_field(&self) -> Option<FieldName> {
        match self.focus() {
            Focus::Field(index) => self.form.fields().get(index).map(|f| f.name),
            _ => None,
        }
    }

    /// Append a typed character to the focused field
    pub fn input_char(&mut self, c: char) {
        self.edit_focused(|value| value.push(c));
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        self.edit_focused(|value| {
            value.pop();
        });
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(name) = self.focused_field() {
            let mut value = self.form.value(name).to_string();
            edit(&mut value);
            self.form.on_field_change(name, value);
        }
    }

    /// Submit the form; focus returns to the first field when accepted
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.on_submit();
        match &outcome {
            SubmitOutcome::Accepted => self.active_slot = 0,
            SubmitOutcome::Rejected(failed) => {
                // Jump to the first invalid field
                let first = failed.first().and_then(|(name, _)| {
                    self.form.fields().iter().position(|f| f.name == *name)
                });
                if let Some(index) = first {
                    self.active_slot = index;
                }
            }
        }
        outcome
    }

    /// Press whatever has focus. Fields and the submit button submit; links
    /// emit a navigation request.
    pub fn activate(&mut self, router: &mut dyn Router) -> Option<SubmitOutcome> {
        match self.focus() {
            Focus::Field(_) | Focus::Submit => Some(self.submit()),
            Focus::Link(index) => {
                if let Some(link) = self.kind.links().get(index) {
                    tracing::info!(from = ?self.kind, to = ?link.target, "navigation requested");
                    link.follow(router);
                }
                None
            }
        }
    }
}

impl Form for ScreenState {
    fn field_count(&self) -> usize {
        self.form.fields().len() + 1 + self.kind.links().len()
    }
    fn active_field(&self) -> usize {
        self.active_slot
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_slot = index.min(self.field_count() - 1);
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub screen: ScreenState,
    pub snackbar: Option<SnackbarState>,
    pub pending_route: PendingRoute,
    /// Auto-dismiss delay for the confirmation
    pub confirmation_timeout: Option<Duration>,
    pub mask_passwords: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: ScreenState::new(ScreenKind::default()),
            snackbar: None,
            pending_route: PendingRoute::default(),
            confirmation_timeout: None,
            mask_passwords: true,
        }
    }
}

impl AppState {
    /// Replace the current screen with a fresh one; nothing carries over
    pub fn show(&mut self, kind: ScreenKind) {
        self.screen = ScreenState::new(kind);
        self.snackbar = None;
    }

    pub fn current_screen(&self) -> ScreenKind {
        self.screen.kind
    }

    pub fn confirmation_visible(&self) -> bool {
        self.screen.form.show_confirmation()
    }

    /// Submit the current screen, starting the snackbar when accepted
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.screen.submit();
        self.start_snackbar_if_accepted(&outcome);
        outcome
    }

    /// Activate the focused slot, then apply any navigation it requested
    pub fn activate(&mut self) {
        if let Some(outcome) = self.screen.activate(&mut self.pending_route) {
            self.start_snackbar_if_accepted(&outcome);
        }
        self.apply_pending_route();
    }

    fn start_snackbar_if_accepted(&mut self, outcome: &SubmitOutcome) {
        if outcome.is_accepted() {
            self.snackbar = Some(SnackbarState::new(self.confirmation_timeout));
        }
    }

    pub fn dismiss_confirmation(&mut self) {
        self.screen.form.on_dismiss_confirmation();
        self.snackbar = None;
    }

    /// Auto-dismiss the confirmation once its timeout has passed
    pub fn tick(&mut self) {
        if self.snackbar.as_ref().is_some_and(SnackbarState::is_expired) {
            tracing::debug!("confirmation timed out");
            self.dismiss_confirmation();
        }
    }

    fn apply_pending_route(&mut self) {
        if let Some(request) = self.pending_route.take() {
            self.show(request.target);
        }
    }
}
