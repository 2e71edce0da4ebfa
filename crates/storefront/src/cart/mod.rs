//! Shopping cart state.
//!
//! [`CartStore`] holds the shopper's line items and the signed-in user, and
//! is the only way to change either. Every line is unique by product ID and
//! holds at least one unit; the store removes lines rather than keeping them
//! at zero.
//!
//! # Example
//!
//! ```
//! use shopease_core::{Price, Product};
//! use shopease_storefront::cart::CartStore;
//!
//! let mut cart = CartStore::new();
//! let apple = Product::new("a", "Apple", Price::from_cents(1000).unwrap());
//!
//! cart.add_to_cart_with_quantity(apple.clone(), 2);
//! cart.add_to_cart(apple);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.count(), 3);
//! assert_eq!(cart.total(), Price::from_cents(3000).unwrap());
//! ```

mod events;
mod line_item;

pub use events::{CartEvent, CartListener, SubscriptionId};
pub use line_item::CartLineItem;

use serde::Serialize;
use shopease_core::{Price, Product, User};
use tracing::instrument;

use self::events::Listeners;

/// Result of an add request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted,
    /// The quantity was added onto an existing line.
    Merged,
    /// The quantity was not positive; nothing changed.
    Rejected,
}

/// Snapshot of everything the cart tracks.
///
/// Views read this on render; listeners receive it with each event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    items: Vec<CartLineItem>,
    user: Option<User>,
}

impl CartState {
    /// Line items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Sum of unit price × quantity over every line. Zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// Total units across every line (not the number of distinct products).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.product.id == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLineItem> {
        self.items
            .iter_mut()
            .find(|line| line.product.id == product_id)
    }
}

/// In-memory cart for a single storefront session.
///
/// Single-owner and synchronous: every method runs to completion before
/// returning, and registered listeners are told about the change before the
/// method returns.
#[derive(Debug, Default)]
pub struct CartStore {
    state: CartState,
    listeners: Listeners,
}

impl CartStore {
    /// Create an empty cart with no signed-in user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of `product`.
    pub fn add_to_cart(&mut self, product: Product) -> AddOutcome {
        self.add_to_cart_with_quantity(product, 1)
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the cart its quantity is increased by
    /// `quantity`; otherwise a new line is appended at the end. Non-positive
    /// quantities are rejected without touching the cart. A line holds at most
    /// `u32::MAX` units; larger requests and merges are clamped there.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart_with_quantity(&mut self, product: Product, quantity: i64) -> AddOutcome {
        let Some(quantity) = positive_quantity(quantity) else {
            tracing::warn!("Ignoring add with non-positive quantity");
            return AddOutcome::Rejected;
        };

        let product_id = product.id.clone();

        let (outcome, line_quantity) = match self.state.line_mut(product_id.as_str()) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                (AddOutcome::Merged, line.quantity)
            }
            None => {
                self.state.items.push(CartLineItem::new(product, quantity));
                (AddOutcome::Inserted, quantity)
            }
        };

        tracing::debug!(?outcome, line_quantity, "Added to cart");
        self.emit(&CartEvent::ItemAdded {
            product_id,
            quantity: line_quantity,
        });

        outcome
    }

    /// Remove the line for `product_id`. Does nothing if it isn't there.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, product_id: &str) {
        let Some(position) = self
            .state
            .items
            .iter()
            .position(|line| line.product.id == product_id)
        else {
            tracing::debug!("Remove for product not in cart");
            return;
        };

        let removed = self.state.items.remove(position);

        tracing::debug!("Removed from cart");
        self.emit(&CartEvent::ItemRemoved {
            product_id: removed.product.id,
        });
    }

    /// Set the quantity of the line for `product_id`.
    ///
    /// A quantity of zero or less removes the line, exactly like
    /// [`remove_from_cart`](Self::remove_from_cart). Unknown IDs are ignored;
    /// this never inserts.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        let Some(quantity) = positive_quantity(quantity) else {
            self.remove_from_cart(product_id);
            return;
        };

        let Some(line) = self.state.line_mut(product_id) else {
            tracing::debug!("Quantity update for product not in cart");
            return;
        };

        if line.quantity == quantity {
            return;
        }

        line.quantity = quantity;
        let product_id = line.product.id.clone();

        tracing::debug!("Updated quantity");
        self.emit(&CartEvent::QuantityChanged {
            product_id,
            quantity,
        });
    }

    /// Remove every line. The signed-in user is unaffected.
    pub fn clear_cart(&mut self) {
        if self.state.items.is_empty() {
            return;
        }

        self.state.items.clear();

        tracing::debug!("Cleared cart");
        self.emit(&CartEvent::Cleared);
    }

    /// Replace the signed-in user. Never changes the cart's items.
    pub fn set_user(&mut self, user: Option<User>) {
        match &user {
            Some(user) => tracing::info!(user_id = %user.id, "User signed in"),
            None => tracing::info!("User cleared"),
        }

        self.state.user = user;
        self.emit(&CartEvent::UserChanged);
    }

    /// Sign out and forget the cart contents.
    ///
    /// Listeners receive a single [`CartEvent::LoggedOut`] once both the user
    /// and the items are gone.
    pub fn logout(&mut self) {
        let user = self.state.user.take();
        self.state.items.clear();

        match user {
            Some(user) => tracing::info!(user_id = %user.id, "User logged out"),
            None => tracing::info!("Logout without signed-in user"),
        }

        self.emit(&CartEvent::LoggedOut);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Sum of unit price × quantity across the cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.state.total()
    }

    /// Total number of units across the cart.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.state.count()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLineItem> {
        self.state.line(product_id)
    }

    /// Quantity held for `product_id`, if present.
    #[must_use]
    pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
        self.line(product_id).map(|line| line.quantity)
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register a listener to be told about every applied mutation.
    pub fn subscribe(&mut self, listener: impl CartListener + 'static) -> SubscriptionId {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self, event: &CartEvent) {
        self.listeners.notify(event, &self.state);
    }
}

/// Narrow a caller-supplied quantity to a stored one.
///
/// Returns `None` for zero or negative input; clamps at `u32::MAX`.
fn positive_quantity(quantity: i64) -> Option<u32> {
    if quantity <= 0 {
        return None;
    }
    Some(u32::try_from(quantity).unwrap_or(u32::MAX))
}
