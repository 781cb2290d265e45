//! Explicit session context: created on sign-up, ended on logout.

use chrono::{DateTime, Utc};
use verity_core::{FieldError, SignUpForm, UserProfile};

/// Identity of whoever is driving a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user: Option<UserProfile>,
    started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Validate a sign-up form and open a session for the new user.
    ///
    /// # Errors
    ///
    /// Returns every field error when the form is invalid.
    pub fn sign_up(form: &SignUpForm) -> Result<Self, Vec<FieldError>> {
        let user = form.validate()?;
        tracing::info!(email = %user.email, "session started");
        Ok(Self::for_user(user))
    }

    #[must_use]
    pub fn for_user(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            started_at: Utc::now(),
        }
    }

    /// Anonymous session.
    #[must_use]
    pub fn guest() -> Self {
        Self {
            user: None,
            started_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Name shown in reports.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("Guest", |u| u.full_name.as_str())
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
