//! Sign-up form rules.
//!
//! Validates what the shopper typed into the registration form and turns it
//! into the payload the registration endpoint expects. Sending the request,
//! and signing the new account in afterwards, belong to the caller; nothing
//! here touches the cart.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};
use shopease_core::{
    Email, EmailError, MIN_PASSWORD_LENGTH, PasswordCheck, PasswordRule, password_checks,
};
use thiserror::Error;

/// Reasons a sign-up form is not submittable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// The full-name field is blank.
    #[error("name is required")]
    MissingName,

    /// The email does not parse.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password is shorter than the minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// The terms checkbox was left unticked.
    #[error("terms of service not accepted")]
    TermsNotAccepted,
}

impl SignupError {
    /// Text for the error toast shown to the shopper.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingName => "Please enter your full name".to_string(),
            Self::InvalidEmail(_) => "Please enter a valid email address".to_string(),
            Self::PasswordMismatch => "Passwords do not match".to_string(),
            Self::PasswordTooShort { min } => format!("Password must be at least {min} characters"),
            Self::TermsNotAccepted => {
                "Please accept the Terms of Service and Privacy Policy".to_string()
            }
        }
    }
}

/// State of the confirm-password field, for colouring its border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Nothing typed into the confirmation yet.
    Empty,
    /// Confirmation equals the password.
    Matches,
    /// Confirmation differs from the password.
    Mismatch,
}

/// Raw registration form input.
#[derive(Debug)]
pub struct SignupForm {
    /// Full name.
    pub name: String,
    /// Email as typed.
    pub email: String,
    /// Password.
    pub password: SecretString,
    /// Password typed a second time.
    pub confirm_password: SecretString,
    /// Whether the terms checkbox is ticked.
    pub accepted_terms: bool,
}

impl SignupForm {
    /// Build a form from field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
        accepted_terms: bool,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::from(password.into()),
            confirm_password: SecretString::from(confirm_password.into()),
            accepted_terms,
        }
    }

    /// Live password checklist.
    #[must_use]
    pub fn password_checks(&self) -> [PasswordCheck; 4] {
        password_checks(self.password.expose_secret())
    }

    /// State of the confirmation field.
    #[must_use]
    pub fn confirmation(&self) -> Confirmation {
        let confirm = self.confirm_password.expose_secret();
        if confirm.is_empty() {
            Confirmation::Empty
        } else if confirm == self.password.expose_secret() {
            Confirmation::Matches
        } else {
            Confirmation::Mismatch
        }
    }

    /// Check the form and build the registration request.
    ///
    /// Only the length rule blocks submission; the other checklist rules are
    /// advisory.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`SignupError`], checked in the order:
    /// name, email, password match, password length, terms.
    pub fn validate(&self) -> Result<RegistrationRequest, SignupError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SignupError::MissingName);
        }

        let email = Email::parse(&self.email)?;

        let password = self.password.expose_secret();
        if password != self.confirm_password.expose_secret() {
            return Err(SignupError::PasswordMismatch);
        }

        if !PasswordRule::MinLength.is_satisfied_by(password) {
            return Err(SignupError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        if !self.accepted_terms {
            return Err(SignupError::TermsNotAccepted);
        }

        tracing::debug!(email_domain = email.domain(), "Sign-up form valid");

        Ok(RegistrationRequest {
            email,
            name: name.to_owned(),
            password: SecretString::from(password),
        })
    }
}

/// Body of the registration call.
#[derive(Debug, Serialize)]
pub struct RegistrationRequest {
    /// Account email.
    pub email: Email,
    /// Full name, trimmed.
    pub name: String,
    /// Plain-text password; only exposed when serialized.
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

fn serialize_secret<S: Serializer>(
    secret: &SecretString,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}
