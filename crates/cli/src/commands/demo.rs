//! Cart walkthrough command.

use shopease_core::{CurrencyCode, Email, Price, Product, User};
use shopease_storefront::{CartContext, CartEvent, CartState, CartStore};

use super::cart_summary;

/// One step of the walkthrough and the cart as it stood afterwards.
pub struct Step {
    pub heading: &'static str,
    pub summary: Vec<String>,
}

/// Replay add, merge, update, remove and logout against a fresh session.
///
/// # Errors
///
/// Returns an error if the session cart is unavailable or the demo data is
/// rejected.
pub fn walkthrough(currency: CurrencyCode) -> Result<Vec<Step>, Box<dyn std::error::Error>> {
    let mut session = CartContext::new();
    let mut steps = Vec::new();

    let cart = session.cart_mut()?;
    cart.subscribe(|event: &CartEvent, state: &CartState| {
        tracing::info!(
            event = ?event,
            lines = state.items().len(),
            units = state.count(),
            "Cart changed"
        );
    });

    let a = Product::new("a", "Product A", Price::from_cents(1000)?);
    let b = Product::new("b", "Product B", Price::from_cents(500)?);

    let mut record = |heading: &'static str, cart: &CartStore| {
        steps.push(Step {
            heading,
            summary: cart_summary(cart, currency),
        });
    };

    cart.set_user(Some(User::new(
        "demo-user",
        Email::parse("demo@shopease.test")?,
        "Demo Shopper",
    )));
    record("Signed in", cart);

    cart.add_to_cart_with_quantity(a, 2);
    record("Added 2 x a", cart);

    cart.add_to_cart(b);
    record("Added b", cart);

    cart.update_quantity("a", 1);
    record("Set a to 1", cart);

    cart.remove_from_cart("b");
    record("Removed b", cart);

    cart.logout();
    record("Logged out", cart);

    session.end_session();
    Ok(steps)
}

/// Print every walkthrough step.
///
/// # Errors
///
/// Returns an error if the walkthrough cannot be run.
#[allow(clippy::print_stdout)]
pub fn run(currency: CurrencyCode) -> Result<(), Box<dyn std::error::Error>> {
    for step in walkthrough(currency)? {
        println!("{}", step.heading);
        for line in step.summary {
            println!("{line}");
        }
    }
    Ok(())
}
