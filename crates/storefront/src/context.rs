//! Explicit cart context.
//!
//! A [`CartContext`] is created once per storefront session and handed to
//! the views that need the cart. There is no global instance: a view that
//! was not given an active context cannot reach a cart, and asking for one
//! fails with [`StorefrontError::NoActiveCart`] instead of quietly handing
//! back an empty cart.

use crate::cart::CartStore;
use crate::error::{Result, StorefrontError};

/// Owner of the session's cart.
#[derive(Debug)]
pub struct CartContext {
    store: Option<CartStore>,
}

impl CartContext {
    /// Start a session with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        tracing::debug!("Cart session started");
        Self {
            store: Some(CartStore::new()),
        }
    }

    /// Start a session around an existing store.
    #[must_use]
    pub const fn with_store(store: CartStore) -> Self {
        Self { store: Some(store) }
    }

    /// A context with no cart behind it.
    #[must_use]
    pub const fn detached() -> Self {
        Self { store: None }
    }

    /// Whether a cart is currently available.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.store.is_some()
    }

    /// Read access to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NoActiveCart`] if the session has no cart.
    pub fn cart(&self) -> Result<&CartStore> {
        self.store.as_ref().ok_or_else(no_active_cart)
    }

    /// Write access to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NoActiveCart`] if the session has no cart.
    pub fn cart_mut(&mut self) -> Result<&mut CartStore> {
        self.store.as_mut().ok_or_else(no_active_cart)
    }

    /// End the session, handing back the cart it owned.
    ///
    /// Further access through this context fails.
    pub fn end_session(&mut self) -> Option<CartStore> {
        let store = self.store.take();
        if store.is_some() {
            tracing::debug!("Cart session ended");
        }
        store
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

fn no_active_cart() -> StorefrontError {
    tracing::error!("Cart accessed outside an active cart session");
    StorefrontError::NoActiveCart
}
