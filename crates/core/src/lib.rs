//! Mahatta Core - Storefront state core.
//!
//! This crate holds everything a Mahatta Art storefront front-end needs
//! besides its markup:
//! - a static wallpaper [`Catalog`] with its category, space and mood tables
//! - listing [`selection`] (filters and sort order)
//! - a [`NavigationStack`] of visited pages
//! - the shopper's [`Wishlist`] and [`Cart`]
//! - the [`Storefront`] controller that owns them, and the derived [`view`]s
//!
//! # Architecture
//!
//! The core crate does no I/O. A front-end translates user input into
//! [`Action`]s, hands them to [`Storefront::dispatch`], and renders
//! [`Storefront::snapshot`]. All state has a single writer (the controller).
//!
//! ```rust
//! use mahatta_core::{Action, Page, Storefront, WallpaperId};
//!
//! let mut store = Storefront::builtin();
//! store.dispatch(Action::AddToCart(WallpaperId::from("1")));
//! assert_eq!(store.current_page(), Page::Cart);
//! assert_eq!(store.header_view().cart_count, 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod navigation;
pub mod selection;
pub mod store;
pub mod types;
pub mod view;
pub mod wishlist;

pub use cart::{Cart, CartEntry, CartTotals};
pub use catalog::{Catalog, CatalogData, CatalogError, Review, Wallpaper};
pub use navigation::{NavigationEntry, NavigationStack};
pub use selection::{
    FilterField, FilterKind, FilterValue, Filters, ListingFilter, Selection, SortKey,
    apply_filters, apply_sort,
};
pub use store::{Action, StoreOptions, Storefront};
pub use types::*;
pub use view::{PageView, Snapshot};
pub use wishlist::Wishlist;
