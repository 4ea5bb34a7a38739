//! # Domain Types
//!
//! Records shared by the admin dashboard and the cashier page.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ADMIN SIDE                          CASHIER SIDE                       │
//! │  ┌─────────────────┐                 ┌─────────────────┐                │
//! │  │    Product      │                 │    CartItem     │                │
//! │  │  id, name       │                 │  productId      │                │
//! │  │  price, stock   │                 │  name, price    │                │
//! │  │  description?   │                 │  quantity ≥ 1   │                │
//! │  │  category?      │                 └────────┬────────┘                │
//! │  └─────────────────┘                          │ checkout                │
//! │  ┌─────────────────┐                 ┌────────▼────────┐                │
//! │  │     Order       │                 │  CashierOrder   │                │
//! │  │  method, status │                 │  items snapshot │                │
//! │  │  items (frozen) │                 │  total, method  │                │
//! │  └─────────────────┘                 └─────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize in camelCase, the shape the web front-ends and the
//! persisted blob use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the admin catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name. Duplicates are allowed.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Units on hand.
    pub stock: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Refreshed on every update.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// Product fields as submitted by the product form (no id, no timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewProduct {
    /// Trims the name and turns blank optional fields into `None`.
    ///
    /// The product form always submits every field, so an untouched
    /// description arrives as `""`.
    pub fn normalized(self) -> Self {
        NewProduct {
            name: self.name.trim().to_string(),
            description: non_blank(self.description),
            category: non_blank(self.category),
            ..self
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Partial product update. `None` leaves a field untouched.
///
/// For the optional fields, `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub stock: Option<u32>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
}

impl ProductPatch {
    /// Trims the name and turns blank description/category into a clear,
    /// the same way [`NewProduct::normalized`] treats a new product.
    pub fn normalized(self) -> Self {
        ProductPatch {
            name: self.name.map(|n| n.trim().to_string()),
            description: self.description.map(non_blank),
            category: self.category.map(non_blank),
            ..self
        }
    }

    /// Merges the provided fields into `product`. Timestamps are left to
    /// the caller.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
    }
}

/// An edit form replaces every field.
impl From<NewProduct> for ProductPatch {
    fn from(form: NewProduct) -> Self {
        ProductPatch {
            name: Some(form.name),
            price: Some(form.price),
            stock: Some(form.stock),
            description: Some(form.description),
            category: Some(form.category),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How an admin-side order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Transfer];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "transfer" => Ok(PaymentMethod::Transfer),
            _ => Err(ValidationError::NotAllowed {
                field: "method".to_string(),
                allowed: PaymentMethod::ALL.iter().map(|m| m.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Status of an admin-side order.
///
/// There is no state machine: any status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] =
        [OrderStatus::Pending, OrderStatus::Completed, OrderStatus::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: OrderStatus::ALL.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Order (admin side)
// =============================================================================

/// A line item frozen at the time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
    /// Unit price at the time of sale.
    pub price: Money,
}

impl OrderItem {
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// An admin-side order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub id: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    /// Σ price × quantity at creation. Never recomputed.
    pub total: Money,
    pub method: PaymentMethod,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

/// Order draft: everything but the id and the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewOrder {
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub method: PaymentMethod,
    #[serde(default)]
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

/// Partial order update.
///
/// Items and total are historical and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub method: Option<PaymentMethod>,
    pub date: Option<DateTime<Utc>>,
}

impl OrderPatch {
    /// A patch that only moves the status.
    pub fn status(status: OrderStatus) -> Self {
        OrderPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply_to(self, order: &mut Order) {
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(method) = self.method {
            order.method = method;
        }
        if let Some(date) = self.date {
            order.date = date;
        }
    }
}

// =============================================================================
// Cart (cashier side)
// =============================================================================

/// A line in the cashier's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Always ≥ 1 while the item is in a cart.
    pub quantity: i64,
}

impl CartItem {
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// An order created by the cashier's checkout. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CashierOrder {
    pub id: String,
    pub items: Vec<CartItem>,
    pub total: Money,
    pub payment_method: String,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Admin Snapshot
// =============================================================================

/// The persisted admin state: the whole catalog and order collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminSnapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        let now = Utc::now();
        Product {
            id: "p1".to_string(),
            name: "Organic Tea Set".to_string(),
            price: Money::from_major(320),
            stock: 15,
            description: Some("Premium organic tea collection".to_string()),
            category: Some("Beverages".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!(" Card ".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!(
            "TRANSFER".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Transfer
        );
        assert!("crypto".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_order_status_parsing_and_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(
            "completed".parse::<OrderStatus>().unwrap(),
            OrderStatus::Completed
        );
        assert!("refunded".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_patch_normalization_clears_blank_optionals() {
        let patch = ProductPatch {
            name: Some("  Matcha Set ".to_string()),
            description: Some(Some("   ".to_string())),
            category: Some(Some(" Beverages ".to_string())),
            ..Default::default()
        }
        .normalized();

        assert_eq!(patch.name.as_deref(), Some("Matcha Set"));
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.category, Some(Some("Beverages".to_string())));

        let mut p = product();
        patch.apply_to(&mut p);
        assert_eq!(p.description, None);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(product()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["price"], 32000);
    }

    #[test]
    fn test_absent_optionals_are_optional_in_bindings() {
        let mut bare = product();
        bare.description = None;
        bare.category = None;

        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("category").is_none());

        let decl = Product::decl();
        assert!(decl.contains("description?:"));
        assert!(decl.contains("category?:"));
    }

    #[test]
    fn test_normalized_drops_blank_optionals() {
        let form = NewProduct {
            name: "  Artisan Chocolate ".to_string(),
            price: Money::from_major(280),
            stock: 30,
            description: Some("   ".to_string()),
            category: Some("Food".to_string()),
        }
        .normalized();

        assert_eq!(form.name, "Artisan Chocolate");
        assert_eq!(form.description, None);
        assert_eq!(form.category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_patch_merges_only_provided_fields() {
        let mut p = product();
        ProductPatch {
            stock: Some(3),
            description: Some(None),
            ..Default::default()
        }
        .apply_to(&mut p);

        assert_eq!(p.stock, 3);
        assert_eq!(p.description, None);
        assert_eq!(p.name, "Organic Tea Set");
        assert_eq!(p.category.as_deref(), Some("Beverages"));
    }

    #[test]
    fn test_order_patch_from_json() {
        let patch: OrderPatch = serde_json::from_str(r#"{"status":"cancelled"}"#).unwrap();
        assert_eq!(patch, OrderPatch::status(OrderStatus::Cancelled));
    }

    #[test]
    fn test_line_totals() {
        let item = CartItem {
            product_id: "001".to_string(),
            name: "Hot coffee".to_string(),
            price: Money::from_major(45),
            quantity: 2,
        };
        assert_eq!(item.line_total(), Money::from_major(90));

        let line = OrderItem {
            product_id: "3".to_string(),
            quantity: 3,
            price: Money::from_major(280),
        };
        assert_eq!(line.line_total(), Money::from_major(840));
    }
}
