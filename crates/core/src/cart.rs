//! Cart ledger: ordered lines with merge-on-add.
//!
//! Quantities never drop below 1 through updates; a line only leaves the cart
//! through [`Cart::remove_item`]. Operations on an id that is not in the cart
//! leave it unchanged.

use serde::Serialize;
use tracing::debug;

use crate::catalog::Wallpaper;
use crate::types::{CurrencyCode, Price, PriceError, WallpaperId};

/// Smallest quantity a line can hold.
pub const MIN_QUANTITY: u32 = 1;

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    pub product: Wallpaper,
    pub quantity: u32,
}

impl CartEntry {
    /// Price of the line (unit price times quantity).
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the total does not fit.
    pub fn line_total(&self) -> Result<Price, PriceError> {
        self.product.price.times(self.quantity)
    }
}

/// Totals derived from the cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Sum of quantities (the header badge).
    pub item_count: u32,
    pub subtotal: Price,
    /// Always zero: every order ships free.
    pub shipping: Price,
    pub total: Price,
}

/// Ordered list of cart lines, one per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// An existing line is incremented in place; otherwise a new line with
    /// quantity 1 is appended.
    pub fn add_item(&mut self, product: &Wallpaper) {
        if let Some(entry) = self.entry_mut(&product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            debug!(id = %product.id, quantity = entry.quantity, "Incremented cart line");
            return;
        }
        self.entries.push(CartEntry {
            product: product.clone(),
            quantity: MIN_QUANTITY,
        });
        debug!(id = %product.id, "Added cart line");
    }

    /// Shift a line's quantity by `delta`, clamping at [`MIN_QUANTITY`].
    ///
    /// Returns `false` if no line has this id or the quantity is unchanged
    /// (a zero delta, or a decrement on a line already at the minimum).
    pub fn update_quantity(&mut self, id: &WallpaperId, delta: i32) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        let old = entry.quantity;
        let shifted = if delta.is_negative() {
            old.saturating_sub(delta.unsigned_abs())
        } else {
            old.saturating_add(delta.unsigned_abs())
        };
        entry.quantity = shifted.max(MIN_QUANTITY);
        entry.quantity != old
    }

    /// Remove a line regardless of its quantity.
    ///
    /// Returns `false` if no line has this id.
    pub fn remove_item(&mut self, id: &WallpaperId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.product.id != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, id: &WallpaperId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| &entry.product.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0, |sum, entry| sum.saturating_add(entry.quantity))
    }

    /// Sum of line totals.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if lines are priced in a currency other than
    /// `currency` or the sum overflows.
    pub fn subtotal(&self, currency: CurrencyCode) -> Result<Price, PriceError> {
        self.entries
            .iter()
            .try_fold(Price::zero(currency), |sum, entry| {
                sum.checked_add(&entry.line_total()?)
            })
    }

    /// Item count, subtotal, shipping and grand total.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`subtotal`](Self::subtotal).
    pub fn totals(&self, currency: CurrencyCode) -> Result<CartTotals, PriceError> {
        let subtotal = self.subtotal(currency)?;
        let shipping = Price::zero(currency);
        Ok(CartTotals {
            item_count: self.item_count(),
            subtotal,
            shipping,
            total: subtotal.checked_add(&shipping)?,
        })
    }

    fn entry_mut(&mut self, id: &WallpaperId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|entry| &entry.product.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Wallpaper {
        Catalog::builtin()
            .product(&WallpaperId::from(id))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_repeat_add_merges() {
        let mut cart = Cart::new();
        let p = product("2");
        for _ in 0..5 {
            cart.add_item(&p);
        }
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entry(&p.id).unwrap().quantity, 5);
    }

    #[test]
    fn test_add_preserves_line_order() {
        let mut cart = Cart::new();
        cart.add_item(&product("3"));
        cart.add_item(&product("1"));
        cart.add_item(&product("3"));
        let ids: Vec<&str> = cart.entries().iter().map(|e| e.product.id.as_str()).collect();
        assert_eq!(ids, ["3", "1"]);
    }

    #[test]
    fn test_update_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        let p = product("1");
        cart.add_item(&p);
        cart.add_item(&p);

        assert!(cart.update_quantity(&p.id, -1));
        assert_eq!(cart.entry(&p.id).unwrap().quantity, 1);
        assert!(!cart.update_quantity(&p.id, -1));
        assert_eq!(cart.entry(&p.id).unwrap().quantity, 1);
        assert!(!cart.update_quantity(&p.id, i32::MIN));
        assert_eq!(cart.entry(&p.id).unwrap().quantity, 1);
        assert!(cart.update_quantity(&p.id, 3));
        assert_eq!(cart.entry(&p.id).unwrap().quantity, 4);
    }

    #[test]
    fn test_update_without_effect_reports_unchanged() {
        let mut cart = Cart::new();
        let p = product("1");
        cart.add_item(&p);
        cart.add_item(&p);
        let before = cart.clone();

        assert!(!cart.update_quantity(&p.id, 0));
        assert_eq!(cart, before);

        assert!(cart.update_quantity(&p.id, -5));
        let at_min = cart.clone();
        assert!(!cart.update_quantity(&p.id, -1));
        assert_eq!(cart, at_min);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut cart = Cart::new();
        cart.add_item(&product("1"));
        let before = cart.clone();
        assert!(!cart.update_quantity(&WallpaperId::from("9"), 2));
        assert!(!cart.remove_item(&WallpaperId::from("9")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let mut cart = Cart::new();
        let p = product("4");
        cart.add_item(&p);
        cart.update_quantity(&p.id, 10);
        assert!(cart.remove_item(&p.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_after_double_add() {
        let mut cart = Cart::new();
        let p = product("1");
        cart.add_item(&p);
        cart.add_item(&p);

        let totals = cart.totals(CurrencyCode::INR).unwrap();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.subtotal.amount, Decimal::new(15130, 2));
        assert!(totals.shipping.amount.is_zero());
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = Cart::new().totals(CurrencyCode::INR).unwrap();
        assert_eq!(totals.item_count, 0);
        assert!(totals.total.amount.is_zero());
    }
}
