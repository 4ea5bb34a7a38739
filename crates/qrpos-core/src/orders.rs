//! # Order Store
//!
//! Admin-side orders. Totals are computed once, when the order is added, and
//! line items are never touched afterwards.

use crate::money::Money;
use crate::types::{NewOrder, Order, OrderItem, OrderPatch, OrderStatus};

/// Σ price × quantity over a list of order lines.
pub fn order_total(items: &[OrderItem]) -> Money {
    items.iter().map(OrderItem::line_total).sum()
}

/// Ordered admin order collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a seeded or persisted list as-is. Stored totals are trusted.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        OrderBook { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Appends an order with a fresh id and a total computed from its items.
    pub fn add(&mut self, draft: NewOrder) -> &Order {
        let index = self.orders.len();
        self.orders.push(Order {
            id: crate::new_id(),
            date: draft.date,
            total: order_total(&draft.items),
            method: draft.method,
            status: draft.status,
            items: draft.items,
        });
        &self.orders[index]
    }

    /// Applies a status/method/date patch. Unknown ids change nothing.
    pub fn update(&mut self, id: &str, patch: OrderPatch) -> Option<&Order> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        patch.apply_to(order);
        Some(order)
    }

    pub fn completed(&self) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.orders
    }
}
