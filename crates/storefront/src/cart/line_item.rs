//! Cart line items.

use serde::Serialize;
use shopease_core::{Price, Product, ProductId};

/// One product in the cart together with how many units the shopper wants.
///
/// A line item only exists while `quantity >= 1`; the store removes lines
/// instead of holding them at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineItem {
    /// The product, exactly as supplied by the catalog when first added.
    pub product: Product,
    /// Number of units, always at least one.
    pub quantity: u32,
}

impl CartLineItem {
    pub(crate) const fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// The product's catalog ID.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price × quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}
