//! Newtype IDs for type-safe entity references.
//!
//! Catalog and account identifiers are opaque strings issued by external
//! services. Use the `define_id!` macro to wrap them so a product ID can never
//! be passed where a user ID is expected.

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Accessors: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, `AsRef<str>` and `Borrow<str>`
///
/// `Borrow<str>` lets collections keyed by the ID be queried with a plain
/// `&str`, which is how UI callers hand IDs back to the cart.
///
/// # Example
///
/// ```rust
/// # use shopease_core::define_id;
/// define_id!(ProductId);
/// define_id!(UserId);
///
/// let product_id = ProductId::new("sku-1");
/// let user_id = UserId::new("sku-1");
///
/// assert_eq!(product_id.as_str(), user_id.as_str());
/// // These are different types, so this won't compile:
/// // let _: UserId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(UserId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_compares_with_str() {
        let id = ProductId::new("abc");
        assert_eq!(id, "abc");
        assert!(id == *"abc");
        assert_ne!(id, "abd");
    }

    #[test]
    fn test_borrow_lookup() {
        let ids: HashSet<ProductId> = ["a", "b"].into_iter().map(ProductId::from).collect();
        assert!(ids.contains("a"));
        assert!(!ids.contains("c"));
    }

    #[test]
    fn test_display() {
        let id = UserId::new(String::from("user-42"));
        assert_eq!(id.to_string(), "user-42");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("p-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-1\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
