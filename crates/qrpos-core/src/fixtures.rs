//! # Fixtures
//!
//! Seed data for a fresh admin dashboard. Used when nothing has been
//! persisted yet, by the `seed` binary, and by tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::money::Money;
use crate::orders::order_total;
use crate::types::{AdminSnapshot, Order, OrderItem, OrderStatus, PaymentMethod, Product};

/// Midnight UTC on the given day.
fn day(year: i32, month: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, d, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn product(
    id: &str,
    name: &str,
    baht: i64,
    stock: u32,
    description: &str,
    category: &str,
    created: DateTime<Utc>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_major(baht),
        stock,
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        created_at: created,
        updated_at: created,
    }
}

fn order(
    id: &str,
    date: DateTime<Utc>,
    method: PaymentMethod,
    status: OrderStatus,
    items: Vec<OrderItem>,
) -> Order {
    Order {
        id: id.to_string(),
        date,
        total: order_total(&items),
        method,
        status,
        items,
    }
}

fn line(product_id: &str, quantity: i64, baht: i64) -> OrderItem {
    OrderItem {
        product_id: product_id.to_string(),
        quantity,
        price: Money::from_major(baht),
    }
}

pub fn mock_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Premium Coffee Beans",
            450,
            25,
            "High-quality arabica coffee beans",
            "Beverages",
            day(2024, 1, 15),
        ),
        product(
            "2",
            "Organic Tea Set",
            320,
            15,
            "Premium organic tea collection",
            "Beverages",
            day(2024, 1, 16),
        ),
        product(
            "3",
            "Artisan Chocolate",
            280,
            30,
            "Handcrafted dark chocolate",
            "Food",
            day(2024, 1, 17),
        ),
    ]
}

/// Order totals are derived from the line items.
pub fn mock_orders() -> Vec<Order> {
    vec![
        order(
            "ORD001",
            day(2024, 1, 20),
            PaymentMethod::Card,
            OrderStatus::Completed,
            vec![line("1", 2, 450), line("3", 1, 280)],
        ),
        order(
            "ORD002",
            day(2024, 1, 21),
            PaymentMethod::Cash,
            OrderStatus::Completed,
            vec![line("2", 2, 320)],
        ),
        order(
            "ORD003",
            day(2024, 1, 21),
            PaymentMethod::Transfer,
            OrderStatus::Pending,
            vec![line("3", 3, 280)],
        ),
    ]
}

pub fn mock_snapshot() -> AdminSnapshot {
    AdminSnapshot {
        products: mock_products(),
        orders: mock_orders(),
    }
}
