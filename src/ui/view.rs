//! Presentation tree
//!
//! `build_card` turns screen state into a plain description of what the card
//! shows. The ratatui code in `forms` only draws this tree, so everything a
//! user sees can be asserted on without a terminal.

use crate::state::{Focus, ScreenKind, ScreenState};

/// Static copy for each screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenCopy {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub submit: &'static str,
    pub confirmation: &'static str,
}

pub fn screen_copy(kind: ScreenKind) -> ScreenCopy {
    match kind {
        ScreenKind::Login => ScreenCopy {
            title: "Welcome Back!",
            subtitle: Some("Sign in to continue"),
            submit: "Login",
            confirmation: "Login successful!",
        },
        ScreenKind::SignUp => ScreenCopy {
            title: "Create Your Account",
            subtitle: Some("Join us to get started."),
            submit: "Sign Up",
            confirmation: "Account created successfully",
        },
        ScreenKind::ForgotPassword => ScreenCopy {
            title: "Récuperation de mot de passe",
            subtitle: None,
            submit: "Envoyer le lien de récupération",
            confirmation: "Lien de récupération envoyé",
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub fields: Vec<FieldView>,
    pub submit: ButtonView,
    pub links: Vec<ButtonView>,
    pub snackbar: Option<SnackbarView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    /// Value to show, or the placeholder when the value is empty
    pub text: String,
    pub is_placeholder: bool,
    pub error: Option<&'static str>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnackbarView {
    pub message: &'static str,
    pub action: &'static str,
    /// Slide-in progress, 0.0 to 1.0
    pub progress: f32,
}

/// Build the card for a screen.
///
/// `snackbar_progress` is only used while the confirmation flag is set.
pub fn build_card(screen: &ScreenState, mask_passwords: bool, snackbar_progress: f32) -> CardView {
    let copy = screen_copy(screen.kind);
    let focus = screen.focus();

    let fields = screen
        .form
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let value = field.display_value(mask_passwords);
            let is_placeholder = value.is_empty();
            FieldView {
                label: field.label,
                text: if is_placeholder {
                    field.placeholder.to_string()
                } else {
                    value
                },
                is_placeholder,
                error: screen.form.error(field.name),
                is_active: focus == Focus::Field(index),
            }
        })
        .collect();

    let links = screen
        .kind
        .links()
        .iter()
        .enumerate()
        .map(|(index, link)| ButtonView {
            label: link.label,
            is_selected: focus == Focus::Link(index),
        })
        .collect();

    let snackbar = screen.form.show_confirmation().then(|| SnackbarView {
        message: copy.confirmation,
        action: "OK",
        progress: snackbar_progress.clamp(0.0, 1.0),
    });

    CardView {
        title: copy.title,
        subtitle: copy.subtitle,
        fields,
        submit: ButtonView {
            label: copy.submit,
            is_selected: focus == Focus::Submit,
        },
        links,
        snackbar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, Form};
    use pretty_assertions::assert_eq;

    fn labels(card: &CardView) -> Vec<&'static str> {
        card.fields.iter().map(|f| f.label).collect()
    }

    #[test]
    fn test_login_card() {
        let screen = ScreenState::new(ScreenKind::Login);
        let card = build_card(&screen, true, 0.0);

        assert_eq!(card.title, "Welcome Back!");
        assert_eq!(card.subtitle, Some("Sign in to continue"));
        assert_eq!(labels(&card), vec!["Email", "Password"]);
        assert_eq!(card.submit.label, "Login");
        assert_eq!(
            card.links.iter().map(|l| l.label).collect::<Vec<_>>(),
            vec!["Create an account", "Forgot password?"]
        );
        assert!(card.snackbar.is_none());
    }

    #[test]
    fn test_sign_up_card_labels() {
        let screen = ScreenState::new(ScreenKind::SignUp);
        let card = build_card(&screen, true, 0.0);
        assert_eq!(
            labels(&card),
            vec![
                "First Name",
                "Last Name",
                "Email",
                "Phone Number",
                "Password",
                "Confirm Password",
            ]
        );
        assert_eq!(card.submit.label, "Sign Up");
    }

    #[test]
    fn test_forgot_password_card_has_no_subtitle() {
        let screen = ScreenState::new(ScreenKind::ForgotPassword);
        let card = build_card(&screen, true, 0.0);
        assert!(card.subtitle.is_none());
        assert_eq!(card.submit.label, "Envoyer le lien de récupération");
    }

    #[test]
    fn test_empty_fields_show_placeholder() {
        let screen = ScreenState::new(ScreenKind::SignUp);
        let card = build_card(&screen, true, 0.0);
        let phone = &card.fields[3];
        assert!(phone.is_placeholder);
        assert_eq!(phone.text, "(XXX) XXX-XXXX");
    }

    #[test]
    fn test_password_masking() {
        let mut screen = ScreenState::new(ScreenKind::Login);
        screen.form.on_field_change(FieldName::Password, "secret");

        let masked = build_card(&screen, true, 0.0);
        let plain = build_card(&screen, false, 0.0);

        assert_eq!(masked.fields[1].text, "••••••");
        assert!(!masked.fields[1].is_placeholder);
        assert_eq!(plain.fields[1].text, "secret");
    }

    #[test]
    fn test_focus_is_reflected() {
        let mut screen = ScreenState::new(ScreenKind::Login);
        let card = build_card(&screen, true, 0.0);
        assert!(card.fields[0].is_active);
        assert!(!card.submit.is_selected);

        screen.next_field();
        screen.next_field();
        let card = build_card(&screen, true, 0.0);
        assert!(card.fields.iter().all(|f| !f.is_active));
        assert!(card.submit.is_selected);

        screen.next_field();
        let card = build_card(&screen, true, 0.0);
        assert!(card.links[0].is_selected);
        assert!(!card.links[1].is_selected);
    }

    #[test]
    fn test_errors_are_shown_per_field() {
        let mut screen = ScreenState::new(ScreenKind::Login);
        screen.form.on_field_change(FieldName::Email, "ada@example.com");
        screen.submit();

        let card = build_card(&screen, true, 0.0);

        assert_eq!(card.fields[0].error, None);
        assert_eq!(card.fields[1].error, Some("Password cannot be empty"));
    }

    #[test]
    fn test_snackbar_after_accepted_submit() {
        let mut screen = ScreenState::new(ScreenKind::SignUp);
        screen.form.on_field_change(FieldName::FirstName, "Ada");
        screen.form.on_field_change(FieldName::LastName, "Lovelace");
        screen.form.on_field_change(FieldName::Email, "ada@example.com");
        screen.form.on_field_change(FieldName::Phone, "5551234567");
        screen.form.on_field_change(FieldName::Password, "engine");
        screen.form.on_field_change(FieldName::ConfirmPassword, "engine");
        screen.submit();

        let card = build_card(&screen, true, 2.0);

        assert_eq!(
            card.snackbar,
            Some(SnackbarView {
                message: "Account created successfully",
                action: "OK",
                progress: 1.0,
            })
        );
        assert!(card.fields.iter().all(|f| f.is_placeholder));
    }

    #[test]
    fn test_every_screen_has_distinct_confirmation() {
        let messages: Vec<_> = ScreenKind::ALL
            .iter()
            .map(|k| screen_copy(*k).confirmation)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Login successful!",
                "Account created successfully",
                "Lien de récupération envoyé",
            ]
        );
    }
}
