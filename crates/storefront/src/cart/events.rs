//! Change notifications for cart observers.
//!
//! Views register a [`CartListener`] with the store and re-render when they
//! are told something changed. Notifications are delivered synchronously,
//! in subscription order, once the mutation that caused them has fully
//! completed.

use core::fmt;

use serde::Serialize;
use shopease_core::ProductId;

use super::CartState;

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A product was added, either as a new line or merged into an existing one.
    ItemAdded {
        /// Product that was added.
        product_id: ProductId,
        /// Resulting quantity of the line.
        quantity: u32,
    },
    /// A line's quantity was replaced.
    QuantityChanged {
        /// Product whose line changed.
        product_id: ProductId,
        /// New quantity of the line.
        quantity: u32,
    },
    /// A line was removed.
    ItemRemoved {
        /// Product whose line was removed.
        product_id: ProductId,
    },
    /// Every line was removed.
    Cleared,
    /// The current user was replaced (sign-in, or an explicit sign-out via `set_user`).
    UserChanged,
    /// The user signed out and the cart was emptied.
    LoggedOut,
}

/// Receives cart change notifications.
///
/// `state` is the cart as it stands after the change.
pub trait CartListener {
    /// Called after each applied mutation.
    fn on_cart_event(&mut self, event: &CartEvent, state: &CartState);
}

impl<F> CartListener for F
where
    F: FnMut(&CartEvent, &CartState),
{
    fn on_cart_event(&mut self, event: &CartEvent, state: &CartState) {
        self(event, state);
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Registered listeners, in subscription order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn CartListener>)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Box<dyn CartListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &CartEvent, state: &CartState) {
        for (_, listener) in &mut self.entries {
            listener.on_cart_event(event, state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
