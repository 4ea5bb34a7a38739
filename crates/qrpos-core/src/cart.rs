//! # Cart Store
//!
//! The cashier's cart and the history of orders its checkout produced.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cashier Checkout                                │
//! │                                                                         │
//! │  scan / tap ──► add_item ──► items[] ──► total(), item_count()          │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                     checkout("QR") ──► CashierOrder (deep copy)         │
//! │                                │           │                            │
//! │                                │           └──► history[]               │
//! │                                ▼                                        │
//! │                     clear() (caller's job)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never cached. They are folds over the item slice.

use chrono::Utc;

use crate::money::Money;
use crate::types::{CartItem, CashierOrder};
use crate::validation::MAX_CART_QUANTITY;

/// Σ price × quantity.
pub fn cart_total(items: &[CartItem]) -> Money {
    items.iter().map(CartItem::line_total).sum()
}

/// Σ quantity.
pub fn cart_item_count(items: &[CartItem]) -> i64 {
    items.iter().map(|item| item.quantity).sum()
}

/// Cart line items plus the cashier-side order history.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    history: Vec<CashierOrder>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn orders(&self) -> &[CashierOrder] {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of a product.
    ///
    /// An existing line only gets its quantity bumped; the name and price it
    /// was first added with are kept. Returns `false`, changing nothing, when
    /// the line already holds [`MAX_CART_QUANTITY`] units.
    pub fn add_item(&mut self, product_id: &str, name: &str, price: Money) -> bool {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) if item.quantity >= MAX_CART_QUANTITY => false,
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => {
                self.items.push(CartItem {
                    product_id: product_id.to_string(),
                    name: name.to_string(),
                    price,
                    quantity: 1,
                });
                true
            }
        }
    }

    /// Removes a line. Returns whether anything was removed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != before
    }

    /// Sets a line's quantity exactly. `quantity <= 0` removes the line.
    ///
    /// Returns whether the line changed. Quantities above
    /// [`MAX_CART_QUANTITY`] are refused.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        if quantity > MAX_CART_QUANTITY {
            return false;
        }
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Empties the cart. The order history is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> Money {
        cart_total(&self.items)
    }

    pub fn item_count(&self) -> i64 {
        cart_item_count(&self.items)
    }

    /// Records the current cart as a [`CashierOrder`] and returns it.
    ///
    /// The cart itself is left as is.
    pub fn checkout(&mut self, payment_method: &str) -> CashierOrder {
        let order = CashierOrder {
            id: format!("order_{}", uuid::Uuid::new_v4().simple()),
            items: self.items.clone(),
            total: self.total(),
            payment_method: payment_method.to_string(),
            timestamp: Utc::now(),
        };
        self.history.push(order.clone());
        order
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee(store: &mut CartStore) {
        store.add_item("001", "กาแฟร้อน", Money::from_major(45));
    }

    fn tea(store: &mut CartStore) {
        store.add_item("002", "ชาเย็น", Money::from_major(35));
    }

    #[test]
    fn test_repeated_add_merges_lines() {
        let mut store = CartStore::new();
        for _ in 0..4 {
            coffee(&mut store);
        }

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 4);
    }

    #[test]
    fn test_add_keeps_first_name_and_price() {
        let mut store = CartStore::new();
        coffee(&mut store);
        store.add_item("001", "Renamed", Money::from_major(99));

        let item = &store.items()[0];
        assert_eq!(item.name, "กาแฟร้อน");
        assert_eq!(item.price, Money::from_major(45));
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_total_and_count() {
        let mut store = CartStore::new();
        coffee(&mut store);
        coffee(&mut store);
        tea(&mut store);

        assert_eq!(store.total(), Money::from_major(125));
        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut a = CartStore::new();
        coffee(&mut a);
        tea(&mut a);
        let mut b = a.clone();

        assert!(a.set_quantity("001", 0));
        assert!(b.remove_item("001"));
        assert_eq!(a.items(), b.items());

        assert!(a.set_quantity("002", -3));
        assert!(a.is_empty());
    }

    #[test]
    fn test_set_quantity_exact_and_missing() {
        let mut store = CartStore::new();
        coffee(&mut store);

        assert!(store.set_quantity("001", 7));
        assert_eq!(store.item_count(), 7);

        assert!(!store.set_quantity("999", 2));
        assert!(!store.remove_item("999"));
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_line_quantity_is_capped() {
        let mut store = CartStore::new();
        coffee(&mut store);

        assert!(!store.set_quantity("001", i64::MAX / 2));
        assert_eq!(store.item_count(), 1);

        assert!(store.set_quantity("001", MAX_CART_QUANTITY));
        assert!(!store.add_item("001", "กาแฟร้อน", Money::from_major(45)));
        assert_eq!(store.item_count(), MAX_CART_QUANTITY);
        assert_eq!(store.total(), Money::from_major(45 * MAX_CART_QUANTITY));
    }

    #[test]
    fn test_checkout_snapshots_without_clearing() {
        let mut store = CartStore::new();
        coffee(&mut store);
        coffee(&mut store);
        tea(&mut store);

        let order = store.checkout("QR");
        assert!(order.id.starts_with("order_"));
        assert_eq!(order.total, Money::from_major(125));
        assert_eq!(order.payment_method, "QR");
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.orders().len(), 1);

        store.set_quantity("001", 10);
        store.clear();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(store.orders()[0].items[0].quantity, 2);
        assert_eq!(store.orders()[0].total, Money::from_major(125));
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut store = CartStore::new();
        tea(&mut store);
        store.checkout("QR");
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.total(), Money::zero());
        assert_eq!(store.orders().len(), 1);
    }
}
