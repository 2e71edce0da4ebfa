//! Property tests for cart invariants.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;
use shopease_core::{Price, Product};
use shopease_storefront::CartStore;

#[derive(Debug, Clone)]
enum Op {
    Add(usize, i64),
    Remove(usize),
    Update(usize, i64),
    Clear,
}

const IDS: [&str; 5] = ["a", "b", "c", "d", "e"];

fn catalog_product(index: usize) -> Product {
    let id = IDS[index % IDS.len()];
    // Deterministic price per id so merges never see two prices for one product
    let cents = i64::try_from(index % IDS.len()).unwrap() * 175 + 99;
    Product::new(id, id, Price::from_cents(cents).unwrap())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..IDS.len(), -3i64..20).prop_map(|(i, q)| Op::Add(i, q)),
        (0..IDS.len()).prop_map(Op::Remove),
        (0..IDS.len(), -3i64..20).prop_map(|(i, q)| Op::Update(i, q)),
        Just(Op::Clear),
    ]
}

fn apply(cart: &mut CartStore, op: &Op) {
    match *op {
        Op::Add(i, q) => {
            cart.add_to_cart_with_quantity(catalog_product(i), q);
        }
        Op::Remove(i) => cart.remove_from_cart(IDS[i]),
        Op::Update(i, q) => cart.update_quantity(IDS[i], q),
        Op::Clear => cart.clear_cart(),
    }
}

fn cart_from(ops: &[Op]) -> CartStore {
    let mut cart = CartStore::new();
    for op in ops {
        apply(&mut cart, op);
    }
    cart
}

fn snapshot(cart: &CartStore) -> Vec<(String, u32)> {
    cart.items()
        .iter()
        .map(|line| (line.product.id.to_string(), line.quantity))
        .collect()
}

proptest! {
    #[test]
    fn lines_stay_unique_and_positive(ops in prop::collection::vec(op(), 0..40)) {
        let cart = cart_from(&ops);

        let ids: HashSet<_> = cart.items().iter().map(|line| line.product.id.clone()).collect();
        prop_assert_eq!(ids.len(), cart.len());
        prop_assert!(cart.items().iter().all(|line| line.quantity >= 1));
    }

    #[test]
    fn adding_new_product_grows_count_and_total(
        ops in prop::collection::vec(op(), 0..20),
        n in 1i64..50,
    ) {
        let mut cart = cart_from(&ops);
        let fresh = Product::new("fresh", "Fresh", Price::from_cents(333).unwrap());
        let (count, total) = (cart.count(), cart.total());

        cart.add_to_cart_with_quantity(fresh.clone(), n);

        prop_assert_eq!(cart.count(), count + u64::try_from(n).unwrap());
        prop_assert_eq!(cart.total(), total + fresh.price.times(u32::try_from(n).unwrap()));
        prop_assert_eq!(cart.items().last().map(|l| l.product.id.as_str()), Some("fresh"));
    }

    #[test]
    fn adding_existing_product_merges(
        ops in prop::collection::vec(op(), 0..20),
        index in 0..IDS.len(),
        q in 1i64..10,
        n in 1i64..10,
    ) {
        let mut cart = cart_from(&ops);
        cart.update_quantity(IDS[index], q);
        cart.add_to_cart_with_quantity(catalog_product(index), q);
        let before = cart.quantity_of(IDS[index]).unwrap();
        let distinct = cart.len();

        cart.add_to_cart_with_quantity(catalog_product(index), n);

        prop_assert_eq!(cart.quantity_of(IDS[index]), Some(before + u32::try_from(n).unwrap()));
        prop_assert_eq!(cart.len(), distinct);
    }

    #[test]
    fn non_positive_update_equals_remove(
        ops in prop::collection::vec(op(), 0..20),
        index in 0..IDS.len(),
        q in i64::MIN..=0,
    ) {
        let mut updated = cart_from(&ops);
        let mut removed = cart_from(&ops);

        updated.update_quantity(IDS[index], q);
        removed.remove_from_cart(IDS[index]);

        prop_assert_eq!(snapshot(&updated), snapshot(&removed));
        prop_assert!(updated.line(IDS[index]).is_none());
    }

    #[test]
    fn positive_update_replaces(
        ops in prop::collection::vec(op(), 0..20),
        index in 0..IDS.len(),
        k in 1i64..100,
    ) {
        let mut cart = cart_from(&ops);
        cart.add_to_cart(catalog_product(index));

        cart.update_quantity(IDS[index], k);

        prop_assert_eq!(cart.quantity_of(IDS[index]), Some(u32::try_from(k).unwrap()));
    }

    #[test]
    fn unknown_ids_change_nothing(ops in prop::collection::vec(op(), 0..20), q in -5i64..5) {
        let mut cart = cart_from(&ops);
        let (items, total, count) = (snapshot(&cart), cart.total(), cart.count());

        cart.remove_from_cart("missing");
        cart.update_quantity("missing", q);

        prop_assert_eq!(snapshot(&cart), items);
        prop_assert_eq!(cart.total(), total);
        prop_assert_eq!(cart.count(), count);
    }

    #[test]
    fn clear_and_logout_zero_the_totals(ops in prop::collection::vec(op(), 0..20)) {
        let mut cleared = cart_from(&ops);
        cleared.clear_cart();
        prop_assert_eq!(cleared.total().amount(), Decimal::ZERO);
        prop_assert_eq!(cleared.count(), 0);

        let mut logged_out = cart_from(&ops);
        logged_out.logout();
        prop_assert!(logged_out.is_empty());
        prop_assert!(logged_out.user().is_none());
    }

    #[test]
    fn total_matches_line_sum(ops in prop::collection::vec(op(), 0..40)) {
        let cart = cart_from(&ops);

        let expected: Price = cart.items().iter().map(|line| line.subtotal()).sum();
        let units: u64 = cart.items().iter().map(|line| u64::from(line.quantity)).sum();

        prop_assert_eq!(cart.total(), expected);
        prop_assert_eq!(cart.count(), units);
    }
}
