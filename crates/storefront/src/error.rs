//! Storefront error type.
//!
//! Cart mutations never fail; errors only come from using the cart outside a
//! session or from sign-up validation.

use thiserror::Error;

use crate::signup::SignupError;

/// Errors surfaced by the storefront layer.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The cart was accessed without an active cart session.
    ///
    /// This is an integration bug in the caller, not a user-facing condition.
    #[error("cart accessed outside an active cart session")]
    NoActiveCart,

    /// Sign-up form validation failed.
    #[error("sign-up rejected: {0}")]
    Signup(#[from] SignupError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
