//! Signed-in shopper.

use serde::{Deserialize, Serialize};

use super::{Email, UserId};

/// A shopper account returned by the authentication flow.
///
/// The cart only cares whether one is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier.
    pub id: UserId,
    /// Sign-in email address.
    pub email: Email,
    /// Full name given at registration.
    pub name: String,
}

impl User {
    /// Create a new user.
    #[must_use]
    pub fn new(id: impl Into<UserId>, email: Email, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email,
            name: name.into(),
        }
    }
}
