//! ShopEase Storefront library.
//!
//! Client-side state for the storefront UI:
//! - [`cart`] - The shopper's cart, its derived totals and change notifications
//! - [`context`] - Per-session ownership of the cart, passed explicitly to views
//! - [`signup`] - Registration form rules and request payload
//!
//! Everything here is synchronous and single-owner. Rendering, routing and
//! network calls live with the caller.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod context;
pub mod error;
pub mod signup;

pub use cart::{
    AddOutcome, CartEvent, CartLineItem, CartListener, CartState, CartStore, SubscriptionId,
};
pub use context::CartContext;
pub use error::{Result, StorefrontError};
pub use signup::{Confirmation, RegistrationRequest, SignupError, SignupForm};
