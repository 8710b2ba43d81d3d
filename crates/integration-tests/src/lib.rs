//! Integration tests for the Mahatta storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mahatta-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopper_journeys` - End-to-end sessions through the action surface
//! - `state_properties` - Invariants checked over many action sequences
//!
//! Helpers shared by the test files live here.

use mahatta_core::{Action, Storefront, WallpaperId};

/// A fresh session over the built-in catalog.
#[must_use]
pub fn storefront() -> Storefront {
    Storefront::builtin()
}

/// Shorthand for a catalog id.
#[must_use]
pub fn id(s: &str) -> WallpaperId {
    WallpaperId::from(s)
}

/// Dispatch each action in order, returning how many changed state.
pub fn replay(store: &mut Storefront, actions: impl IntoIterator<Item = Action>) -> usize {
    actions
        .into_iter()
        .filter(|action| store.dispatch(action.clone()))
        .count()
}
