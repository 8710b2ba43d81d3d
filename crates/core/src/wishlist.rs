//! Wishlist membership set.

use std::collections::HashSet;

use crate::catalog::{Catalog, Wallpaper};
use crate::types::WallpaperId;

/// Set of wallpaper ids the shopper has marked as favorites.
///
/// Membership only: there is no count per id and no insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: HashSet<WallpaperId>,
}

impl Wishlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the id if absent, remove it if present.
    ///
    /// Returns `true` if the id is a member afterwards.
    pub fn toggle(&mut self, id: &WallpaperId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &WallpaperId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wishlisted products, in catalog order.
    ///
    /// Ids with no catalog record are skipped.
    #[must_use]
    pub fn items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Wallpaper> {
        catalog
            .products()
            .iter()
            .filter(|p| self.ids.contains(&p.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> WallpaperId {
        WallpaperId::from(s)
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&id("2"));
        let before = wishlist.clone();

        assert!(wishlist.toggle(&id("4")));
        assert!(!wishlist.toggle(&id("4")));
        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_toggle_sequence() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&id("3"));
        wishlist.toggle(&id("5"));
        wishlist.toggle(&id("3"));
        assert_eq!(wishlist.count(), 1);
        assert!(wishlist.contains(&id("5")));
        assert!(!wishlist.contains(&id("3")));
    }

    #[test]
    fn test_items_follow_catalog_order() {
        let catalog = Catalog::builtin();
        let mut wishlist = Wishlist::new();
        for member in ["6", "1", "4", "missing"] {
            wishlist.toggle(&id(member));
        }
        let ids: Vec<&str> = wishlist
            .items(&catalog)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "4", "6"]);
        assert_eq!(wishlist.count(), 4);
    }
}
