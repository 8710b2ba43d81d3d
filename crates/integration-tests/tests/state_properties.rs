//! Invariants checked across generated action sequences.

#![allow(clippy::unwrap_used)]

use mahatta_core::{
    Action, Cart, Catalog, Filters, NavigationStack, Page, SortKey, Wishlist, apply_filters,
    apply_sort,
};
use mahatta_integration_tests::{id, replay, storefront};

const IDS: [&str; 6] = ["1", "2", "3", "4", "5", "6"];

#[test]
fn test_repeated_adds_never_duplicate_lines() {
    let catalog = Catalog::builtin();
    for n in 1..=20_u32 {
        let mut cart = Cart::new();
        let product = catalog.product(&id("6")).unwrap();
        for _ in 0..n {
            cart.add_item(product);
        }
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entry(&product.id).unwrap().quantity, n);
    }
}

#[test]
fn test_quantity_never_below_one() {
    let catalog = Catalog::builtin();
    let product = catalog.product(&id("2")).unwrap();
    for delta in [-1, -2, -100, i32::MIN, 0, 1, i32::MAX, -5] {
        let mut cart = Cart::new();
        cart.add_item(product);
        cart.update_quantity(&product.id, delta);
        assert!(cart.entry(&product.id).unwrap().quantity >= 1, "delta {delta}");
    }
}

#[test]
fn test_double_toggle_is_identity() {
    for start in 0..IDS.len() {
        let mut wishlist = Wishlist::new();
        for member in IDS.iter().take(start) {
            wishlist.toggle(&id(member));
        }
        for target in IDS {
            let before = wishlist.clone();
            wishlist.toggle(&id(target));
            wishlist.toggle(&id(target));
            assert_eq!(wishlist, before);
        }
    }
}

#[test]
fn test_all_filters_return_input_unchanged() {
    let catalog = Catalog::builtin();
    let products: Vec<_> = catalog.products().iter().collect();
    assert_eq!(apply_filters(&products, &Filters::default()), products);
}

#[test]
fn test_price_sorts_are_mirror_images() {
    let mut data = Catalog::builtin().products().to_vec();
    for (minor, product) in [900_i64, 150, 720, 330, 480, 60].into_iter().zip(data.iter_mut()) {
        product.price = mahatta_core::Price::from_minor(minor, mahatta_core::CurrencyCode::INR);
    }
    let mut asc: Vec<_> = data.iter().collect();
    let mut desc = asc.clone();
    apply_sort(&mut asc, SortKey::PriceLowToHigh);
    apply_sort(&mut desc, SortKey::PriceHighToLow);
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_back_never_empties_history() {
    let mut stack = NavigationStack::new();
    for _ in 0..3 {
        assert!(!stack.back());
        assert_eq!(stack.len(), 1);
    }
    stack.navigate_to(Page::Cart, None);
    assert!(stack.back());
    assert!(!stack.back());
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_badges_match_state_through_mixed_session() {
    let mut store = storefront();
    let mut actions = Vec::new();
    for (i, product) in IDS.iter().enumerate() {
        actions.push(Action::AddToCart(id(product)));
        if i % 2 == 0 {
            actions.push(Action::ToggleWishlist(id(product)));
            actions.push(Action::UpdateCartQuantity {
                id: id(product),
                delta: 1,
            });
        }
        actions.push(Action::Back);
    }
    replay(&mut store, actions);

    let header = store.header_view();
    assert_eq!(header.wishlist_count, store.wishlist().count());
    assert_eq!(header.cart_count, 9);
    assert_eq!(store.cart().entries().len(), 6);
}
