//! Core types for ShopEase.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod password;
pub mod price;
pub mod product;
pub mod user;

pub use email::{Email, EmailError};
pub use id::*;
pub use password::{MIN_PASSWORD_LENGTH, PasswordCheck, PasswordRule, password_checks};
pub use price::{CurrencyCode, Price, PriceError};
pub use product::Product;
pub use user::User;
