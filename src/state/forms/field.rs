//! Form field value objects

use super::validation::{
    validate_confirm_password, validate_email, validate_password, validate_phone,
    validate_required, ValidationError,
};

/// Identity of an input field across all screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    /// Whether the value should be masked when rendered
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// Check a field runs on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    Phone,
    Password,
    /// Value must equal the current value of another field
    Matches(FieldName),
}

impl Rule {
    /// Run the check. `other` is the value of the field named by `Matches`.
    pub fn check(&self, value: &str, other: &str) -> Result<(), ValidationError> {
        match self {
            Rule::Required => validate_required(value),
            Rule::Email => validate_email(value),
            Rule::Phone => validate_phone(value),
            Rule::Password => validate_password(value),
            Rule::Matches(_) => validate_confirm_password(value, other),
        }
    }
}

/// A single input field with its configuration, value and error
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub rule: Rule,
    /// Shown beside the input when `rule` fails
    pub message: &'static str,
    value: String,
    error: Option<&'static str>,
}

impl FormField {
    pub fn new(
        name: FieldName,
        label: &'static str,
        placeholder: &'static str,
        rule: Rule,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            rule,
            message,
            value: String::new(),
            error: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Record the outcome of a submit attempt for this field
    pub fn set_result(&mut self, result: Result<(), ValidationError>) {
        self.error = result.err().map(|_| self.message);
    }

    /// Clear both value and error
    pub fn reset(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self, mask_secrets: bool) -> String {
        if mask_secrets && self.name.is_secret() {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_field() -> FormField {
        FormField::new(
            FieldName::Email,
            "Email",
            "Enter your email",
            Rule::Email,
            "Invalid email address",
        )
    }

    #[test]
    fn test_new_field_is_empty_without_error() {
        let field = email_field();
        assert_eq!(field.value(), "");
        assert!(field.error().is_none());
    }

    #[test]
    fn test_failed_result_stores_field_message() {
        let mut field = email_field();
        field.set_result(Err(ValidationError::InvalidEmail));
        assert_eq!(field.error(), Some("Invalid email address"));
    }

    #[test]
    fn test_passing_result_clears_error() {
        let mut field = email_field();
        field.set_result(Err(ValidationError::InvalidEmail));
        field.set_result(Ok(()));
        assert!(field.error().is_none());
    }

    #[test]
    fn test_reset_clears_value_and_error() {
        let mut field = email_field();
        field.set_value("x".to_string());
        field.set_result(Err(ValidationError::InvalidEmail));
        field.reset();
        assert_eq!(field.value(), "");
        assert!(field.error().is_none());
    }

    #[test]
    fn test_secret_fields_are_masked() {
        let mut field = FormField::new(
            FieldName::Password,
            "Password",
            "Enter your password",
            Rule::Password,
            "Password must be at least 6 characters",
        );
        field.set_value("héllo".to_string());
        assert_eq!(field.display_value(true), "•••••");
        assert_eq!(field.display_value(false), "héllo");
    }

    #[test]
    fn test_plain_fields_are_never_masked() {
        let mut field = email_field();
        field.set_value("a@b.co".to_string());
        assert_eq!(field.display_value(true), "a@b.co");
    }

    #[test]
    fn test_matches_rule_compares_with_other_value() {
        let rule = Rule::Matches(FieldName::Password);
        assert!(rule.check("secret", "secret").is_ok());
        assert_eq!(rule.check("secret", "other"), Err(ValidationError::Mismatch));
    }

    #[test]
    fn test_field_names_are_distinct() {
        let names = [
            FieldName::FirstName,
            FieldName::LastName,
            FieldName::Email,
            FieldName::Phone,
            FieldName::Password,
            FieldName::ConfirmPassword,
        ];
        let mut keys: Vec<_> = names.iter().map(FieldName::as_str).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), names.len());
    }
}
