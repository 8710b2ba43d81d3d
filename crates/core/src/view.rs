//! Derived view data.
//!
//! Everything here is recomputed from the controller on demand. The catalog
//! is small and fixed, so nothing is cached. Field names serialize in
//! camelCase, matching the catalog records they are built from.

use serde::Serialize;

use crate::cart::CartEntry;
use crate::catalog::{Catalog, HeaderLink, Mood, Review, Tile, Wallpaper};
use crate::selection::{Filters, Selection, SortKey};
use crate::store::Storefront;
use crate::types::{Page, PriceError, Surface, WallpaperId};
use crate::wishlist::Wishlist;

/// Listing title when no category is selected.
pub const COLLECTION_TITLE: &str = "The Collection";

/// Header bar: navigation links and badge counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub links: Vec<HeaderLink>,
    pub wishlist_count: usize,
    pub cart_count: u32,
}

/// A product tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: WallpaperId,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub room_type: String,
    pub collection: String,
    pub surface: Surface,
    pub mood: String,
    pub color: String,
    pub wishlisted: bool,
}

impl ProductCard {
    fn new(product: &Wallpaper, wishlist: &Wishlist) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            category: product.category.clone(),
            room_type: product.room_type.clone(),
            collection: product.collection.clone(),
            surface: product.surface,
            mood: product.mood.clone(),
            color: product.color.clone(),
            wishlisted: wishlist.contains(&product.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub categories: Vec<Tile>,
    pub spaces: Vec<Tile>,
    pub moods: Vec<Mood>,
    /// The "starting out" strip: every product, in catalog order.
    pub trending: Vec<ProductCard>,
    pub promises: Vec<String>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub title: String,
    pub hero_image: Option<String>,
    pub sub_categories: Vec<String>,
    pub filters: Filters,
    pub sort: SortKey,
    pub sort_options: Vec<&'static str>,
    pub count: usize,
    pub products: Vec<ProductCard>,
    pub can_go_back: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistView {
    pub items: Vec<ProductCard>,
    pub is_empty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product: ProductCard,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub is_empty: bool,
}

/// The current page's view data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Listing(ListingView),
    Wishlist(WishlistView),
    Cart(CartView),
}

impl PageView {
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Home(_) => Page::Home,
            Self::Listing(_) => Page::Listing,
            Self::Wishlist(_) => Page::Wishlist,
            Self::Cart(_) => Page::Cart,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub header: HeaderView,
    #[serde(flatten)]
    pub page: PageView,
}

impl Storefront {
    #[must_use]
    pub fn header_view(&self) -> HeaderView {
        HeaderView {
            links: Catalog::header_links(),
            wishlist_count: self.wishlist().count(),
            cart_count: self.cart().item_count(),
        }
    }

    /// View data for the current page.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if cart totals cannot be computed.
    pub fn page_view(&self) -> Result<PageView, PriceError> {
        let view = match self.current_page() {
            Page::Home => PageView::Home(self.home_view()),
            Page::Listing => PageView::Listing(self.listing_view()),
            Page::Wishlist => PageView::Wishlist(self.wishlist_view()),
            Page::Cart => PageView::Cart(self.cart_view()?),
        };
        Ok(view)
    }

    /// Header plus current page.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`page_view`](Self::page_view).
    pub fn snapshot(&self) -> Result<Snapshot, PriceError> {
        Ok(Snapshot {
            header: self.header_view(),
            page: self.page_view()?,
        })
    }

    #[must_use]
    pub fn home_view(&self) -> HomeView {
        let catalog = self.catalog();
        HomeView {
            categories: catalog.categories().to_vec(),
            spaces: catalog.spaces().to_vec(),
            moods: catalog.moods().to_vec(),
            trending: catalog
                .products()
                .iter()
                .map(|p| ProductCard::new(p, self.wishlist()))
                .collect(),
            promises: catalog.promises().to_vec(),
            reviews: catalog.reviews().to_vec(),
        }
    }

    /// Listing view for the current selection, or for an unfiltered listing
    /// when the listing is not the current page.
    #[must_use]
    pub fn listing_view(&self) -> ListingView {
        let fallback = Selection::default();
        let selection = self.selection().unwrap_or(&fallback);
        let catalog = self.catalog();
        let category = selection.filters.category.as_option();

        let products: Vec<ProductCard> = selection
            .visible(catalog)
            .into_iter()
            .map(|p| ProductCard::new(p, self.wishlist()))
            .collect();

        ListingView {
            title: category.unwrap_or(COLLECTION_TITLE).to_string(),
            hero_image: catalog
                .category_context(category)
                .map(|tile| tile.image.clone()),
            sub_categories: catalog.sub_categories_for(category),
            filters: selection.filters.clone(),
            sort: selection.sort,
            sort_options: SortKey::ALL.iter().map(SortKey::label).collect(),
            count: products.len(),
            products,
            can_go_back: self.navigation().can_go_back(),
        }
    }

    #[must_use]
    pub fn wishlist_view(&self) -> WishlistView {
        let items: Vec<ProductCard> = self
            .wishlist()
            .items(self.catalog())
            .into_iter()
            .map(|p| ProductCard::new(p, self.wishlist()))
            .collect();
        WishlistView {
            is_empty: items.is_empty(),
            items,
        }
    }

    /// # Errors
    ///
    /// Returns a [`PriceError`] if a line total or the cart totals overflow.
    pub fn cart_view(&self) -> Result<CartView, PriceError> {
        let cart = self.cart();
        let totals = cart.totals(self.catalog().currency())?;
        let lines = cart
            .entries()
            .iter()
            .map(|entry| self.cart_line(entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CartView {
            lines,
            item_count: totals.item_count,
            subtotal: totals.subtotal.display(),
            shipping: totals.shipping.display(),
            total: totals.total.display(),
            is_empty: cart.is_empty(),
        })
    }

    fn cart_line(&self, entry: &CartEntry) -> Result<CartLineView, PriceError> {
        Ok(CartLineView {
            product: ProductCard::new(&entry.product, self.wishlist()),
            quantity: entry.quantity,
            unit_price: entry.product.price.display(),
            line_total: entry.line_total()?.display(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::selection::{FilterKind, ListingFilter};
    use crate::store::Action;

    fn id(s: &str) -> WallpaperId {
        WallpaperId::from(s)
    }

    #[test]
    fn test_home_view_lists_tables() {
        let mut store = Storefront::builtin();
        store.dispatch(Action::ToggleWishlist(id("2")));
        let PageView::Home(home) = store.page_view().unwrap() else {
            panic!("expected home view");
        };
        assert_eq!(home.categories.len(), 6);
        assert_eq!(home.spaces.len(), 4);
        assert_eq!(home.moods.len(), 6);
        assert_eq!(home.promises.len(), 4);
        assert_eq!(home.reviews.len(), 2);

        let trending: Vec<&str> = home.trending.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(trending, ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(home.trending[0].price, "₹75.65");
        let wishlisted: Vec<bool> = home.trending.iter().map(|c| c.wishlisted).collect();
        assert_eq!(wishlisted, [false, true, false, false, false, false]);
    }

    #[test]
    fn test_listing_view_for_category() {
        let mut store = Storefront::builtin();
        store.dispatch(Action::ToggleWishlist(id("5")));
        store.dispatch(Action::listing(Some(ListingFilter::new(
            FilterKind::Category,
            "Modern",
        ))));

        let view = store.listing_view();
        assert_eq!(view.title, "Modern");
        assert_eq!(view.count, 3);
        assert_eq!(view.sub_categories, ["Geometric", "Minimalistic", "Urban", "Industrial"]);
        assert!(view.hero_image.unwrap().contains("1614850523296-d8c1af93d400"));
        assert!(view.can_go_back);
        let wishlisted: Vec<bool> = view.products.iter().map(|c| c.wishlisted).collect();
        assert_eq!(wishlisted, [false, true, false]);
    }

    #[test]
    fn test_unfiltered_listing_uses_collection_title() {
        let mut store = Storefront::builtin();
        store.dispatch(Action::listing(None));
        let view = store.listing_view();
        assert_eq!(view.title, COLLECTION_TITLE);
        assert_eq!(view.count, 6);
        assert_eq!(view.sort_options.len(), 4);
    }

    #[test]
    fn test_cart_view_totals() {
        let mut store = Storefront::builtin();
        store.dispatch(Action::AddToCart(id("1")));
        store.dispatch(Action::AddToCart(id("1")));

        let PageView::Cart(cart) = store.page_view().unwrap() else {
            panic!("expected cart view");
        };
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.subtotal, "₹151.30");
        assert_eq!(cart.shipping, "₹0.00");
        assert_eq!(cart.total, "₹151.30");
        assert!(!cart.is_empty);
    }

    #[test]
    fn test_header_badges() {
        let mut store = Storefront::builtin();
        store.dispatch(Action::ToggleWishlist(id("2")));
        store.dispatch(Action::AddToCart(id("3")));
        store.dispatch(Action::AddToCart(id("4")));
        store.dispatch(Action::UpdateCartQuantity {
            id: id("4"),
            delta: 2,
        });

        let header = store.header_view();
        assert_eq!(header.wishlist_count, 1);
        assert_eq!(header.cart_count, 4);
        assert_eq!(header.links.len(), 4);
    }

    #[test]
    fn test_snapshot_serializes_page_tag() {
        let mut store = Storefront::builtin();
        store.dispatch(Action::go(Page::Wishlist));
        let json = serde_json::to_value(store.snapshot().unwrap()).unwrap();
        assert_eq!(json["page"], "wishlist");
        assert_eq!(json["isEmpty"], true);
        assert_eq!(json["header"]["cartCount"], 0);
    }

    #[test]
    fn test_snapshot_keys_are_camel_case() {
        let mut store = Storefront::builtin();
        store.dispatch(Action::AddToCart(id("1")));
        let json = serde_json::to_value(store.snapshot().unwrap()).unwrap();
        assert_eq!(json["lines"][0]["product"]["roomType"], "Office");
        assert_eq!(json["lines"][0]["lineTotal"], "₹75.65");
        assert_eq!(json["itemCount"], 1);
        assert!(json["lines"][0]["product"].get("room_type").is_none());

        store.dispatch(Action::go(Page::Home));
        let json = serde_json::to_value(store.snapshot().unwrap()).unwrap();
        assert_eq!(json["trending"][0]["roomType"], "Office");
        assert_eq!(json["reviews"][0]["customerName"], "Sarah Jenkins");
        assert_eq!(json["header"]["wishlistCount"], 0);
    }
}
