//! Sign-up form validation and the user profile it produces.

use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_PASSWORD_LEN: usize = 8;

/// Raw sign-up form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub organization: String,
    pub agree_to_terms: bool,
}

/// A validation failure tied to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Identity of the signed-up user, carried by the session context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub organization: Option<String>,
}

impl SignUpForm {
    /// Check every field and return all failures, in form order.
    #[must_use]
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut push = |field, message| errors.push(FieldError { field, message });

        if self.first_name.trim().is_empty() {
            push("first_name", "First name is required");
        }
        if self.last_name.trim().is_empty() {
            push("last_name", "Last name is required");
        }
        if self.email.trim().is_empty() {
            push("email", "Email is required");
        } else if !looks_like_email(&self.email) {
            push("email", "Email is invalid");
        }
        if self.password.is_empty() {
            push("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            push("password", "Password must be at least 8 characters");
        }
        if self.password != self.confirm_password {
            push("confirm_password", "Passwords do not match");
        }
        if !self.agree_to_terms {
            push(
                "agree_to_terms",
                "You must agree to the terms and conditions",
            );
        }
        errors
    }

    /// Validate the form and build the user profile.
    ///
    /// # Errors
    ///
    /// Returns every [`FieldError`] when any field is invalid.
    pub fn validate(&self) -> Result<UserProfile, Vec<FieldError>> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        let organization = self.organization.trim();
        Ok(UserProfile {
            full_name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            email: self.email.trim().to_string(),
            organization: (!organization.is_empty()).then(|| organization.to_string()),
        })
    }
}

/// `\S+@\S+\.\S+` without a regex engine.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let non_space = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    let local = local.rsplit(char::is_whitespace).next().unwrap_or_default();
    let domain = domain.split(char::is_whitespace).next().unwrap_or_default();
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    non_space(local) && non_space(host) && non_space(tld)
}
