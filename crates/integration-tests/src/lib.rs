//! Integration tests for ShopEase.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopease-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - A shopping session driven through `CartContext`
//! - `signup_flow` - Sign-up validation feeding the signed-in cart
