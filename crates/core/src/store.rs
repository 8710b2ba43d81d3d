//! The storefront controller.
//!
//! [`Storefront`] is the single owner of all mutable shopper state. Views read
//! it through shared references; every change goes through
//! [`Storefront::dispatch`].

use tracing::{debug, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::navigation::NavigationStack;
use crate::selection::{FilterField, FilterValue, Filters, ListingFilter, Selection, SortKey};
use crate::types::{Page, WallpaperId};
use crate::wishlist::Wishlist;

/// Behavior switches for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Open the cart page after a product is added to it.
    pub open_cart_on_add: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            open_cart_on_add: true,
        }
    }
}

/// A shopper action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NavigateTo {
        page: Page,
        filter: Option<ListingFilter>,
    },
    Back,
    ToggleWishlist(WallpaperId),
    AddToCart(WallpaperId),
    UpdateCartQuantity {
        id: WallpaperId,
        delta: i32,
    },
    RemoveFromCart(WallpaperId),
    /// Refine the current listing. Ignored on other pages.
    SetFilter {
        field: FilterField,
        value: FilterValue,
    },
    /// Reset every listing filter to `all`. Ignored on other pages.
    ClearFilters,
    /// Change the listing sort order. Ignored on other pages.
    SetSort(SortKey),
}

impl Action {
    /// Navigate to a page with no filter.
    #[must_use]
    pub const fn go(page: Page) -> Self {
        Self::NavigateTo { page, filter: None }
    }

    /// Navigate to the listing, optionally filtered.
    #[must_use]
    pub const fn listing(filter: Option<ListingFilter>) -> Self {
        Self::NavigateTo {
            page: Page::Listing,
            filter,
        }
    }
}

/// Shopper session state over a fixed catalog.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    options: StoreOptions,
    navigation: NavigationStack,
    wishlist: Wishlist,
    cart: Cart,
    selection: Selection,
}

impl Storefront {
    #[must_use]
    pub fn new(catalog: Catalog, options: StoreOptions) -> Self {
        Self {
            catalog,
            options,
            navigation: NavigationStack::new(),
            wishlist: Wishlist::new(),
            cart: Cart::new(),
            selection: Selection::default(),
        }
    }

    /// A fresh session over the built-in catalog with default options.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin(), StoreOptions::default())
    }

    /// Apply an action.
    ///
    /// Returns `true` if any state changed. Actions naming unknown products
    /// and listing refinements outside the listing are no-ops.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(?action, page = %self.current_page(), "Dispatching action");
        match action {
            Action::NavigateTo { page, filter } => {
                self.navigate(page, filter);
                true
            }
            Action::Back => {
                let moved = self.navigation.back();
                if moved {
                    self.on_enter();
                }
                moved
            }
            Action::ToggleWishlist(id) => {
                if self.catalog.product(&id).is_none() {
                    warn!(%id, "Ignoring wishlist toggle for unknown product");
                    return false;
                }
                let member = self.wishlist.toggle(&id);
                debug!(%id, member, "Toggled wishlist");
                true
            }
            Action::AddToCart(id) => {
                let Some(product) = self.catalog.product(&id) else {
                    warn!(%id, "Ignoring add to cart for unknown product");
                    return false;
                };
                self.cart.add_item(product);
                if self.options.open_cart_on_add && self.current_page() != Page::Cart {
                    self.navigate(Page::Cart, None);
                }
                true
            }
            Action::UpdateCartQuantity { id, delta } => {
                let updated = self.cart.update_quantity(&id, delta);
                if !updated {
                    debug!(%id, delta, "Cart quantity unchanged");
                }
                updated
            }
            Action::RemoveFromCart(id) => {
                let removed = self.cart.remove_item(&id);
                if !removed {
                    debug!(%id, "No cart line to remove");
                }
                removed
            }
            Action::SetFilter { field, value } => self.refine(|selection| {
                if selection.filters.get(field) == &value {
                    return false;
                }
                selection.filters.set(field, value);
                true
            }),
            Action::ClearFilters => self.refine(|selection| {
                let cleared = Filters::default();
                if selection.filters == cleared {
                    return false;
                }
                selection.filters = cleared;
                true
            }),
            Action::SetSort(sort) => self.refine(|selection| {
                if selection.sort == sort {
                    return false;
                }
                selection.sort = sort;
                true
            }),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn options(&self) -> StoreOptions {
        self.options
    }

    #[must_use]
    pub const fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn current_page(&self) -> Page {
        self.navigation.current_page()
    }

    /// The listing selection, if the listing is the current page.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        (self.current_page() == Page::Listing).then_some(&self.selection)
    }

    fn navigate(&mut self, page: Page, filter: Option<ListingFilter>) {
        let filter = match page {
            Page::Listing => filter,
            Page::Home | Page::Wishlist | Page::Cart => None,
        };
        self.navigation.navigate_to(page, filter);
        self.on_enter();
    }

    // The listing re-seeds its filters every time it becomes current, whether
    // by push or by back.
    fn on_enter(&mut self) {
        if self.current_page() == Page::Listing {
            self.selection = Selection::seeded(self.navigation.current_filter());
        }
    }

    fn refine(&mut self, change: impl FnOnce(&mut Selection) -> bool) -> bool {
        if self.current_page() != Page::Listing {
            debug!("Ignoring listing refinement outside the listing");
            return false;
        }
        change(&mut self.selection)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::builtin()
    }
}
