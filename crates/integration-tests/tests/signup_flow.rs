//! Sign-up validation feeding a signed-in cart session.

#![allow(clippy::unwrap_used)]

use secrecy::ExposeSecret;
use shopease_core::{Price, Product, User};
use shopease_storefront::{CartContext, SignupError, SignupForm, StorefrontError};

#[test]
fn registration_then_sign_in_keeps_cart() {
    let mut session = CartContext::new();
    let cart = session.cart_mut().unwrap();
    cart.add_to_cart_with_quantity(
        Product::new("tee", "Tee", Price::from_cents(2000).unwrap()),
        2,
    );

    let form = SignupForm::new(
        " Jane Doe ",
        " jane@example.com ",
        "Sup3rSecret",
        "Sup3rSecret",
        true,
    );
    let request = form.validate().unwrap();
    assert_eq!(request.name, "Jane Doe");
    assert_eq!(request.password.expose_secret(), "Sup3rSecret");

    // Validation alone never touches the cart
    assert!(cart.user().is_none());
    assert_eq!(cart.count(), 2);

    // The registration endpoint answered with an id
    cart.set_user(Some(User::new("user-42", request.email.clone(), request.name)));

    let user = cart.user().unwrap();
    assert_eq!(user.id, "user-42");
    assert_eq!(user.email.as_str(), "jane@example.com");
    assert_eq!(cart.count(), 2);
    assert_eq!(cart.total(), Price::from_cents(4000).unwrap());
}

#[test]
fn failed_sign_up_reports_first_problem() {
    let cases = [
        (
            SignupForm::new("", "bad", "x", "y", false),
            "Please enter your full name",
        ),
        (
            SignupForm::new("Jane", "bad", "x", "y", false),
            "Please enter a valid email address",
        ),
        (
            SignupForm::new("Jane", "jane@example.com", "x", "y", false),
            "Passwords do not match",
        ),
        (
            SignupForm::new("Jane", "jane@example.com", "Ab1", "Ab1", false),
            "Password must be at least 8 characters",
        ),
        (
            SignupForm::new("Jane", "jane@example.com", "abcdefgh", "abcdefgh", false),
            "Please accept the Terms of Service and Privacy Policy",
        ),
    ];

    for (form, message) in cases {
        let err = form.validate().unwrap_err();
        assert_eq!(err.user_message(), message, "{err:?}");
    }
}

#[test]
fn signup_error_lifts_into_storefront_error() {
    let err: StorefrontError = SignupError::TermsNotAccepted.into();
    assert!(matches!(
        err,
        StorefrontError::Signup(SignupError::TermsNotAccepted)
    ));
    assert_eq!(
        err.to_string(),
        "sign-up rejected: terms of service not accepted"
    );
}

#[test]
fn request_body_matches_registration_contract() {
    let request = SignupForm::new(
        "Jane",
        "jane@example.com",
        "Sup3rSecret",
        "Sup3rSecret",
        true,
    )
    .validate()
    .unwrap();

    let body: serde_json::Value = serde_json::to_value(&request).unwrap();
    let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["email", "name", "password"]);
}
