//! User form validation feedback.
//!
//! Mirrors the submit behavior of the create and edit user forms: an invalid form
//! is not submitted, and every submit attempt (valid or not) marks the form as
//! validated so field feedback becomes visible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw field values as typed into the create/edit user form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub age: String,
}

/// A form that passed validation, with typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Age,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
        };
        f.write_str(name)
    }
}

/// A single failing field and the feedback shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// All failing fields of one submit attempt, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

impl UserForm {
    /// Validates every field and returns typed values or all field errors.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing each invalid field.
    ///
    /// # Examples
    ///
    /// ```
    /// use livesearch::domain::{Field, UserForm};
    ///
    /// let form = UserForm {
    ///     name: "Ada".into(),
    ///     email: "ada@example.com".into(),
    ///     age: "x".into(),
    /// };
    /// let errors = form.validate().unwrap_err();
    /// assert_eq!(errors.get(Field::Age).unwrap().message, "Invalid age");
    /// ```
    pub fn validate(&self) -> Result<ValidUser, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(Field::Name, "Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(Field::Email, "Email is required");
        } else if !is_email_shaped(email) {
            errors.push(Field::Email, "Enter a valid email address");
        }

        let age = match self.age.trim().parse::<i32>() {
            Ok(age) if age >= 0 => Some(age),
            Ok(_) => {
                errors.push(Field::Age, "Age cannot be negative");
                None
            }
            Err(_) => {
                errors.push(Field::Age, "Invalid age");
                None
            }
        };

        match age {
            Some(age) if errors.is_empty() => Ok(ValidUser {
                name: name.to_string(),
                email: email.to_string(),
                age,
            }),
            _ => Err(errors),
        }
    }
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form is valid and would be sent to the server.
    Submitted(ValidUser),
    /// Submission was prevented; feedback is shown for these fields.
    Prevented(FormErrors),
}

/// Per-form feedback state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    was_validated: bool,
}

impl FormState {
    /// Handles a submit attempt.
    ///
    /// Always marks the form as validated, whether or not submission goes ahead.
    pub fn submit(&mut self, form: &UserForm) -> SubmitOutcome {
        self.was_validated = true;
        match form.validate() {
            Ok(valid) => SubmitOutcome::Submitted(valid),
            Err(errors) => {
                tracing::debug!(invalid_fields = errors.0.len(), "form submission prevented");
                SubmitOutcome::Prevented(errors)
            }
        }
    }

    /// Whether field feedback should be displayed.
    #[must_use]
    pub const fn was_validated(&self) -> bool {
        self.was_validated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, age: &str) -> UserForm {
        UserForm {
            name: name.to_string(),
            email: email.to_string(),
            age: age.to_string(),
        }
    }

    #[test]
    fn valid_form_is_submitted_with_trimmed_values() {
        let mut state = FormState::default();
        let outcome = state.submit(&form(" Ada ", "ada@example.com ", " 36"));
        assert_eq!(
            outcome,
            SubmitOutcome::Submitted(ValidUser {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                age: 36,
            })
        );
        assert!(state.was_validated());
    }

    #[test]
    fn invalid_form_is_prevented_and_still_marked_validated() {
        let mut state = FormState::default();
        assert!(!state.was_validated());

        let SubmitOutcome::Prevented(errors) = state.submit(&form("", "nope", "")) else {
            panic!("expected prevented submission");
        };
        assert!(state.was_validated());

        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Age]);
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["a@b", "@example.com", "a b@example.com", "a@@example.com", "a@example..com"] {
            let errors = form("x", email, "1").validate().unwrap_err();
            assert!(errors.get(Field::Email).is_some(), "{email} should be rejected");
        }
    }

    #[test]
    fn negative_and_fractional_ages_are_rejected() {
        let negative = form("x", "x@y.z", "-1").validate().unwrap_err();
        assert_eq!(negative.get(Field::Age).unwrap().message, "Age cannot be negative");

        let fractional = form("x", "x@y.z", "3.5").validate().unwrap_err();
        assert_eq!(fractional.get(Field::Age).unwrap().message, "Invalid age");
    }
}
