//! Catalog import command.

use std::path::Path;

use shopease_core::{CurrencyCode, Product};
use shopease_storefront::{AddOutcome, CartStore};
use thiserror::Error;

use super::print_cart;

/// Errors loading a product list.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a JSON array of products.
///
/// # Errors
///
/// Returns `CatalogError::Parse` if the document is not a product array.
pub fn parse_products(json: &str, path: &str) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Add every product `quantity` times and report what the cart did.
pub fn fill_cart(cart: &mut CartStore, products: Vec<Product>, quantity: i64) -> usize {
    let mut rejected = 0;
    for product in products {
        if cart.add_to_cart_with_quantity(product, quantity) == AddOutcome::Rejected {
            rejected += 1;
        }
    }
    rejected
}

/// Load products from `path` into a new cart and print the summary.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn run(path: &Path, quantity: i64, currency: CurrencyCode) -> Result<(), CatalogError> {
    let path_label = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path_label.clone(),
        source,
    })?;

    let products = parse_products(&json, &path_label)?;
    tracing::info!(path = %path_label, products = products.len(), "Loaded catalog");

    let mut cart = CartStore::new();
    let rejected = fill_cart(&mut cart, products, quantity);
    if rejected > 0 {
        tracing::warn!(rejected, quantity, "Some products were not added");
    }

    print_cart(&format!("Cart from {path_label}"), &cart, currency);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"id": "mug", "name": "Mug", "price": "8.50", "category": "kitchen"},
        {"id": "tee", "name": "Tee", "price": "20.00", "imageUrl": "/tee.png"},
        {"id": "mug", "name": "Mug", "price": "8.50"}
    ]"#;

    #[test]
    fn test_fill_cart_merges_duplicates() {
        let products = parse_products(CATALOG, "catalog.json").unwrap();
        let mut cart = CartStore::new();

        assert_eq!(fill_cart(&mut cart, products, 2), 0);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of("mug"), Some(4));
        assert_eq!(cart.count(), 6);
        assert_eq!(cart.total().to_string(), "74.00");
    }

    #[test]
    fn test_non_positive_quantity_rejects_all() {
        let products = parse_products(CATALOG, "catalog.json").unwrap();
        let mut cart = CartStore::new();

        assert_eq!(fill_cart(&mut cart, products, 0), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_run_missing_file() {
        let path = std::env::temp_dir().join("shopease-missing-catalog.json");
        let err = run(&path, 1, CurrencyCode::USD).unwrap_err();

        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read "));
    }

    #[test]
    fn test_run_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "shopease-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, CATALOG).unwrap();

        let result = run(&path, 1, CurrencyCode::USD);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_products("{}", "broken.json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse broken.json"));
    }
}
