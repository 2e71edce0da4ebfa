//! CLI command implementations.

pub mod catalog;
pub mod demo;
pub mod signup;

use shopease_core::CurrencyCode;
use shopease_storefront::CartStore;

/// Render the cart as aligned text lines.
pub fn cart_summary(cart: &CartStore, currency: CurrencyCode) -> Vec<String> {
    let mut lines: Vec<String> = cart
        .items()
        .iter()
        .map(|line| {
            format!(
                "  {:<12} x{:<4} {:>10}",
                line.product.id,
                line.quantity,
                line.subtotal().display(currency)
            )
        })
        .collect();

    if lines.is_empty() {
        lines.push("  (empty)".to_string());
    }

    let user = cart
        .user()
        .map_or_else(|| "signed out".to_string(), |user| user.email.to_string());

    lines.push(format!(
        "  total {} | {} unit(s) | {}",
        cart.total().display(currency),
        cart.count(),
        user
    ));

    lines
}

/// Print a heading followed by the cart summary.
#[allow(clippy::print_stdout)]
pub fn print_cart(heading: &str, cart: &CartStore, currency: CurrencyCode) {
    println!("{heading}");
    for line in cart_summary(cart, currency) {
        println!("{line}");
    }
}
