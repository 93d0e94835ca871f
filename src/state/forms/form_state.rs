//! Per-screen form state and its transitions

use super::field::{FieldName, FormField, Rule};
use super::validation::{format_phone, ValidationError, PHONE_MAX_LEN};
use crate::state::ScreenKind;

/// Focus cycling shared by every screen
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Accepting input
    #[default]
    Editing,
    /// Last submit passed; confirmation is showing
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form was reset
    Accepted,
    /// These fields failed, in display order
    Rejected(Vec<(FieldName, ValidationError)>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Field values, field errors and the confirmation flag for one screen.
///
/// Only the `on_*` transitions mutate it. Errors change only on submit, values
/// only through `on_field_change` or the reset after an accepted submit.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FormField>,
    show_confirmation: bool,
    phase: FormPhase,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            show_confirmation: false,
            phase: FormPhase::Editing,
        }
    }

    /// Fresh, empty form for a screen
    pub fn for_screen(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::Login => Self::login(),
            ScreenKind::SignUp => Self::sign_up(),
            ScreenKind::ForgotPassword => Self::forgot_password(),
        }
    }

    pub fn login() -> Self {
        Self::new(vec![
            FormField::new(
                FieldName::Email,
                "Email",
                "Enter your email",
                Rule::Email,
                "Invalid email address",
            ),
            FormField::new(
                FieldName::Password,
                "Password",
                "Enter your password",
                Rule::Required,
                "Password cannot be empty",
            ),
        ])
    }

    pub fn sign_up() -> Self {
        Self::new(vec![
            FormField::new(
                FieldName::FirstName,
                "First Name",
                "Enter your first name",
                Rule::Required,
                "First name is required",
            ),
            FormField::new(
                FieldName::LastName,
                "Last Name",
                "Enter your last name",
                Rule::Required,
                "Last name is required",
            ),
            FormField::new(
                FieldName::Email,
                "Email",
                "Enter your email",
                Rule::Email,
                "Enter a valid email",
            ),
            FormField::new(
                FieldName::Phone,
                "Phone Number",
                "(XXX) XXX-XXXX",
                Rule::Phone,
                "Enter a valid phone number",
            ),
            FormField::new(
                FieldName::Password,
                "Password",
                "Enter your password",
                Rule::Password,
                "Password must be at least 6 characters",
            ),
            FormField::new(
                FieldName::ConfirmPassword,
                "Confirm Password",
                "Confirm your password",
                Rule::Matches(FieldName::Password),
                "Passwords do not match",
            ),
        ])
    }

    pub fn forgot_password() -> Self {
        Self::new(vec![FormField::new(
            FieldName::Email,
            "Email",
            "Entrez votre email",
            Rule::Email,
            "Adresse email invalide",
        )])
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: FieldName) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Current value of a field (empty when the screen has no such field)
    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).map(FormField::value).unwrap_or("")
    }

    pub fn error(&self, name: FieldName) -> Option<&'static str> {
        self.field(name).and_then(FormField::error)
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error().is_some())
    }

    pub fn show_confirmation(&self) -> bool {
        self.show_confirmation
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Store a new raw value for `name`.
    ///
    /// Phone input goes through [`format_phone`]; a formatted value longer than
    /// the phone cap is dropped and the previous value kept. Errors are left
    /// untouched.
    pub fn on_field_change(&mut self, name: FieldName, value: impl Into<String>) {
        let Some(field) = self.fields.iter_mut().find(|f| f.name == name) else {
            tracing::debug!(field = name.as_str(), "ignoring change for absent field");
            return;
        };

        let value = value.into();
        let value = if name == FieldName::Phone {
            let formatted = format_phone(&value);
            if formatted.chars().count() > PHONE_MAX_LEN {
                return;
            }
            formatted
        } else {
            value
        };

        tracing::debug!(field = name.as_str(), len = value.len(), "field changed");
        field.set_value(value);
    }

    /// Validate every field and either record errors or reset the form.
    ///
    /// All fields are checked on every attempt, so an error disappears as soon
    /// as its field passes.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let results: Vec<_> = self
            .fields
            .iter()
            .map(|field| {
                let other = match field.rule {
                    Rule::Matches(target) => self.value(target),
                    _ => "",
                };
                field.rule.check(field.value(), other)
            })
            .collect();

        let mut failed = Vec::new();
        for (field, result) in self.fields.iter_mut().zip(results) {
            if let Err(err) = result {
                failed.push((field.name, err));
            }
            field.set_result(result);
        }

        if !failed.is_empty() {
            tracing::debug!(
                invalid = ?failed
                    .iter()
                    .map(|(name, err)| format!("{}: {err}", name.as_str()))
                    .collect::<Vec<_>>(),
                "submit rejected"
            );
            return SubmitOutcome::Rejected(failed);
        }

        for field in &mut self.fields {
            field.reset();
        }
        self.show_confirmation = true;
        self.phase = FormPhase::Submitted;
        tracing::info!("submit accepted");
        SubmitOutcome::Accepted
    }

    /// Hide the confirmation and return to editing
    pub fn on_dismiss_confirmation(&mut self) {
        self.show_confirmation = false;
        self.phase = FormPhase::Editing;
    }
}
