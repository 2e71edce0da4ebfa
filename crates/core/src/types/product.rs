//! Catalog product as seen by the cart.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product from the catalog service.
///
/// Immutable from the cart's perspective. Only `id` and `price` take part in
/// cart logic; the remaining fields are carried through for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Marketing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Primary image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Catalog category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Create a product with only the fields the cart needs.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: None,
            image_url: None,
            category: None,
        }
    }
}
