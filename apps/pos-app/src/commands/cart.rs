//! # Cart Commands
//!
//! Cart manipulation for the cashier page.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Pay (QR) │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  shown   │     │ recorded │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       complete_payment                   │
//! │                   update_cart_item  (checkout.rs)                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►  (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the whole cart so the page can re-render from it.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CashierState;
use qrpos_core::validation::{validate_cart_quantity, MAX_CART_QUANTITY};
use qrpos_core::{CartItem, CartStore, Money};

/// Cart contents plus the derived figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total: Money,
    pub item_count: i64,
}

impl From<&CartStore> for CartResponse {
    fn from(cart: &CartStore) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }
}

pub fn get_cart(cashier: &CashierState) -> CartResponse {
    debug!("get_cart command");
    cashier.with_cart(|c| CartResponse::from(c))
}

pub(crate) fn line_full(product_id: &str) -> ApiError {
    ApiError::validation(format!(
        "quantity of {} cannot exceed {}",
        product_id, MAX_CART_QUANTITY
    ))
}

/// Adds one unit. A product already in the cart keeps its first name and
/// price. Refused once the line holds the maximum quantity.
pub fn add_to_cart(
    cashier: &CashierState,
    product_id: &str,
    name: &str,
    price: Money,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");
    cashier.with_cart_mut(|c| {
        if !c.add_item(product_id, name, price) {
            return Err(line_full(product_id));
        }
        Ok(CartResponse::from(&*c))
    })
}

/// Sets a quantity; zero or less removes the line.
pub fn update_cart_item(
    cashier: &CashierState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");
    validate_cart_quantity(quantity)?;
    Ok(cashier.with_cart_mut(|c| {
        c.set_quantity(product_id, quantity);
        CartResponse::from(&*c)
    }))
}

pub fn remove_from_cart(cashier: &CashierState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    cashier.with_cart_mut(|c| {
        c.remove_item(product_id);
        CartResponse::from(&*c)
    })
}

pub fn clear_cart(cashier: &CashierState) -> CartResponse {
    debug!("clear_cart command");
    cashier.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn coffee(cashier: &CashierState) -> Result<CartResponse, ApiError> {
        add_to_cart(cashier, "001", "กาแฟร้อน", Money::from_major(45))
    }

    #[test]
    fn test_cart_round() {
        let cashier = CashierState::new();

        coffee(&cashier).unwrap();
        coffee(&cashier).unwrap();
        let cart = add_to_cart(&cashier, "002", "ชาเย็น", Money::from_major(35)).unwrap();

        assert_eq!(cart.total, Money::from_major(125));
        assert_eq!(cart.item_count, 3);
        assert_eq!(cart.items.len(), 2);

        let cart = update_cart_item(&cashier, "002", 4).unwrap();
        assert_eq!(cart.total, Money::from_major(230));

        let cart = update_cart_item(&cashier, "002", 0).unwrap();
        assert_eq!(cart.items.len(), 1);

        let cart = remove_from_cart(&cashier, "missing");
        assert_eq!(cart.items.len(), 1);

        let cart = clear_cart(&cashier);
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, Money::zero());
        assert_eq!(get_cart(&cashier), cart);
    }

    #[test]
    fn test_huge_quantity_is_rejected_and_cart_stays_usable() {
        let cashier = CashierState::new();
        coffee(&cashier).unwrap();

        let err = update_cart_item(&cashier, "001", i64::MAX / 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let cart = get_cart(&cashier);
        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.total, Money::from_major(45));
    }

    #[test]
    fn test_add_refused_at_max_quantity() {
        let cashier = CashierState::new();
        coffee(&cashier).unwrap();

        let cart = update_cart_item(&cashier, "001", MAX_CART_QUANTITY).unwrap();
        assert_eq!(cart.item_count, MAX_CART_QUANTITY);

        let err = coffee(&cashier).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&cashier).item_count, MAX_CART_QUANTITY);
    }

    #[test]
    fn test_response_shape() {
        let cashier = CashierState::new();
        let cart = add_to_cart(&cashier, "003", "น้ำส้มสด", Money::from_major(40)).unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["total"], 4000);
        assert_eq!(json["items"][0]["productId"], "003");
    }
}
