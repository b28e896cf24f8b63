//! Shopping cart model.
//!
//! The cart is an insertion-ordered list of entries with at most one entry per
//! product. Quantities never drop below one; the only way to take a product
//! out of the cart is [`Cart::remove`]. Totals are recomputed from the entries
//! on every read.

use premium_vape_core::{Price, ProductId};
use serde::Serialize;

use crate::catalog::Product;

/// A product in the cart together with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    pub product: Product,
    quantity: u32,
}

impl CartEntry {
    const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Identifier of the product this entry holds.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Quantity, always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.product.price.saturating_mul(self.quantity)
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing entry keeps its position and gains one unit; otherwise a new
    /// entry with quantity one is appended. Returns `false` if the entry was
    /// already at the largest representable quantity and nothing changed.
    pub fn add(&mut self, product: &Product) -> bool {
        if let Some(entry) = self.entry_mut(product.id) {
            let Some(next) = entry.quantity.checked_add(1) else {
                tracing::debug!(product_id = %product.id, "Cart entry already at maximum quantity");
                return false;
            };
            entry.quantity = next;
            tracing::debug!(product_id = %product.id, quantity = next, "Cart entry incremented");
            return true;
        }

        self.entries.push(CartEntry::new(product.clone()));
        tracing::debug!(product_id = %product.id, "Cart entry appended");
        true
    }

    /// Remove the entry for a product. Returns `false` if there was none.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        let removed = self.entries.len() < len_before;
        if removed {
            tracing::debug!(product_id = %id, "Cart entry removed");
        }
        removed
    }

    /// Change an entry's quantity by `delta`, never going below one.
    ///
    /// Returns `true` if the quantity changed. Unknown products are ignored.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i32) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };

        let next = (i64::from(entry.quantity) + i64::from(delta)).clamp(1, i64::from(u32::MAX));
        let next = u32::try_from(next).unwrap_or(u32::MAX);
        if next == entry.quantity {
            return false;
        }

        entry.quantity = next;
        tracing::debug!(product_id = %id, delta, quantity = next, "Cart quantity adjusted");
        true
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Look up the entry for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Sum of price times quantity over all entries.
    #[must_use]
    pub fn total(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Sum of quantities over all entries.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |acc, e| acc.saturating_add(e.quantity))
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn product(id: i32, price: i64) -> Product {
        Product::new(ProductId::new(id), format!("Product {id}"), Price::new(price))
    }

    fn ids(cart: &Cart) -> Vec<(i32, u32)> {
        cart.entries()
            .iter()
            .map(|e| (e.id().as_i32(), e.quantity()))
            .collect()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::zero());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_repeated_add_merges() {
        let a = product(1, 12990);
        let mut cart = Cart::new();
        for n in 1..=7 {
            assert!(cart.add(&a));
            assert_eq!(cart.get(a.id).unwrap().quantity(), n);
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(a.id).unwrap().quantity(), 7);
    }

    #[test]
    fn test_add_keeps_position_of_existing_entry() {
        let (a, b, c) = (product(1, 100), product(2, 200), product(3, 300));
        let mut cart = Cart::new();
        cart.add(&a);
        cart.add(&b);
        cart.add(&c);
        cart.add(&a);
        assert_eq!(ids(&cart), vec![(1, 2), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_adjust_quantity_floors_at_one() {
        let a = product(1, 100);
        let mut cart = Cart::new();
        cart.add(&a);
        cart.add(&a);

        assert!(cart.adjust_quantity(a.id, -1000));
        assert_eq!(cart.get(a.id).unwrap().quantity(), 1);

        // Already at the floor: nothing changes and the entry stays.
        assert!(!cart.adjust_quantity(a.id, -1));
        assert_eq!(ids(&cart), vec![(1, 1)]);
    }

    #[test]
    fn test_adjust_quantity_up() {
        let a = product(1, 100);
        let mut cart = Cart::new();
        cart.add(&a);
        assert!(cart.adjust_quantity(a.id, 4));
        assert_eq!(cart.get(a.id).unwrap().quantity(), 5);
        assert!(!cart.adjust_quantity(a.id, 0));
    }

    #[test]
    fn test_adjust_quantity_saturates() {
        let a = product(1, 1);
        let mut cart = Cart::new();
        cart.add(&a);
        cart.adjust_quantity(a.id, i32::MAX);
        cart.adjust_quantity(a.id, i32::MAX);
        cart.adjust_quantity(a.id, i32::MAX);
        assert_eq!(cart.get(a.id).unwrap().quantity(), u32::MAX);
    }

    #[test]
    fn test_add_at_maximum_quantity_reports_no_change() {
        let a = product(1, 1);
        let mut cart = Cart::new();
        cart.add(&a);
        assert!(cart.adjust_quantity(a.id, i32::MAX));
        assert!(cart.adjust_quantity(a.id, i32::MAX));
        assert!(cart.adjust_quantity(a.id, i32::MAX));
        let before = cart.clone();

        assert!(!cart.add(&a));
        assert_eq!(cart, before);
        assert_eq!(cart.get(a.id).unwrap().quantity(), u32::MAX);
    }

    #[test]
    fn test_unknown_ids_leave_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.add(&product(2, 200));
        let before = cart.clone();

        assert!(!cart.adjust_quantity(ProductId::new(9), 3));
        assert!(!cart.remove(ProductId::new(9)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_then_add_appends_fresh_entry() {
        let (a, b) = (product(1, 100), product(2, 200));
        let mut cart = Cart::new();
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert!(cart.remove(a.id));
        cart.add(&a);
        assert_eq!(ids(&cart), vec![(2, 1), (1, 1)]);
    }

    #[test]
    fn test_totals_match_recomputation() {
        let mut cart = Cart::new();
        let products = [product(1, 12990), product(2, 15990), product(3, 9990)];
        let script: [(usize, i32); 6] = [(0, 0), (1, 0), (0, 2), (2, 0), (1, -5), (2, 3)];

        for (index, delta) in script {
            let p = &products[index];
            if cart.get(p.id).is_none() {
                cart.add(p);
            }
            cart.adjust_quantity(p.id, delta);

            let expected_total: i64 = cart
                .entries()
                .iter()
                .map(|e| e.product.price.minor_units() * i64::from(e.quantity()))
                .sum();
            let expected_count: u32 = cart.entries().iter().map(CartEntry::quantity).sum();
            assert_eq!(cart.total().minor_units(), expected_total);
            assert_eq!(cart.count(), expected_count);
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let a = product(1, 12990);
        let b = product(2, 15990);
        let mut cart = Cart::new();
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(ids(&cart), vec![(1, 2), (2, 1)]);
        assert_eq!(cart.total(), Price::new(41970));
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.entries()[0].line_total(), Price::new(25980));
    }
}
