//! Property-based tests for the cart and wishlist stores.
//!
//! Arbitrary intent sequences must preserve the store invariants:
//! unique cart entries, positive quantities, count/total consistency,
//! and wishlist toggle involution.

use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashSet;

use techstore_core::prelude::*;

/// A cart intent over a small id space.
#[derive(Debug, Clone)]
enum CartIntent {
    Add(u8),
    SetQuantity(u8, i64),
    Remove(u8),
    Clear,
}

fn cart_intent() -> impl Strategy<Value = CartIntent> {
    prop_oneof![
        (0u8..6).prop_map(CartIntent::Add),
        ((0u8..6), -3i64..20).prop_map(|(id, q)| CartIntent::SetQuantity(id, q)),
        (0u8..6).prop_map(CartIntent::Remove),
        Just(CartIntent::Clear),
    ]
}

fn demo_product(id: u8) -> Product {
    Product {
        id: ProductId::new(format!("p{id}")),
        name: format!("Product {id}"),
        brand: if id % 2 == 0 { "Nova" } else { "Pulse" }.to_string(),
        price: 100 * (i64::from(id) + 1),
        original_price: None,
        discount_percent: None,
        rating: 4.0,
        image: String::new(),
        is_best_seller: false,
    }
}

proptest! {
    /// Any intent sequence leaves at most one entry per product id, all
    /// quantities positive, and count/subtotal consistent with entries.
    #[test]
    fn cart_invariants_hold_under_any_sequence(
        intents in vec(cart_intent(), 0..60)
    ) {
        let mut store = CartStore::new();

        for intent in intents {
            match intent {
                CartIntent::Add(id) => { store.add(&demo_product(id)); }
                CartIntent::SetQuantity(id, q) => {
                    store.set_quantity(&ProductId::new(format!("p{id}")), q);
                }
                CartIntent::Remove(id) => {
                    store.remove(&ProductId::new(format!("p{id}")));
                }
                CartIntent::Clear => { store.clear(); }
            }
        }

        let state = store.state();

        let mut seen = HashSet::new();
        for entry in state.entries() {
            prop_assert!(seen.insert(entry.product_id.clone()), "duplicate entry");
            prop_assert!(entry.quantity > 0, "non-positive quantity");
        }

        let count: i64 = state.entries().iter().map(|e| e.quantity).sum();
        prop_assert_eq!(state.item_count(), count);

        let subtotal: i64 = state
            .entries()
            .iter()
            .map(|e| e.unit_price * e.quantity)
            .sum();
        prop_assert_eq!(state.subtotal(), subtotal);
        prop_assert!(state.subtotal() >= 0);
    }

    /// n adds of the same product merge into one entry of quantity n.
    #[test]
    fn repeated_adds_merge(n in 1usize..30) {
        let mut store = CartStore::new();
        let p = demo_product(0);
        for _ in 0..n {
            store.add(&p);
        }

        let state = store.state();
        prop_assert_eq!(state.line_count(), 1);
        prop_assert_eq!(state.item_count(), n as i64);
        prop_assert_eq!(state.subtotal(), p.price * n as i64);
    }

    /// Toggling every id twice restores the original membership.
    ///
    /// Insertion order is not restored (a removed-then-re-added id lands
    /// at the end), so the comparison is over the membership set.
    #[test]
    fn wishlist_double_toggle_restores_membership(
        seed in vec(0u8..8, 0..10),
        toggled in vec(0u8..8, 0..10)
    ) {
        let mut store = WishlistStore::new();
        for id in seed {
            store.toggle(ProductId::new(format!("p{id}")));
        }

        let before: HashSet<ProductId> = store.state().ids().iter().cloned().collect();
        for id in &toggled {
            store.toggle(ProductId::new(format!("p{id}")));
        }
        // Reverse order so nested toggles of the same id unwind cleanly.
        for id in toggled.iter().rev() {
            store.toggle(ProductId::new(format!("p{id}")));
        }

        let after: HashSet<ProductId> = store.state().ids().iter().cloned().collect();
        prop_assert_eq!(after, before);
    }

    /// The wishlist index always agrees with the ordered id list.
    #[test]
    fn wishlist_index_consistent(ids in vec(0u8..8, 0..30)) {
        let mut store = WishlistStore::new();
        for id in ids {
            store.toggle(ProductId::new(format!("p{id}")));
        }

        let state = store.state();
        for id in state.ids() {
            prop_assert!(state.contains(id));
        }
        prop_assert_eq!(state.len(), state.ids().len());

        let unique: HashSet<&ProductId> = state.ids().iter().collect();
        prop_assert_eq!(unique.len(), state.ids().len(), "duplicate wishlist id");
    }
}
