//! # Order Commands
//!
//! Admin-side orders. Totals are computed when an order is created; after
//! that only status, method and date can move.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AdminState;
use qrpos_core::validation::validate_new_order;
use qrpos_core::{NewOrder, Order, OrderPatch, OrderStatus};

pub fn list_orders(admin: &AdminState) -> Vec<Order> {
    debug!("list_orders command");
    admin.with_stores(|s| s.orders.orders().to_vec())
}

pub fn get_order(admin: &AdminState, id: &str) -> Result<Order, ApiError> {
    debug!(id = %id, "get_order command");
    admin
        .with_stores(|s| s.orders.get(id).cloned())
        .ok_or_else(|| ApiError::not_found("Order", id))
}

pub async fn create_order(admin: &AdminState, draft: NewOrder) -> Result<Order, ApiError> {
    debug!(items = draft.items.len(), "create_order command");
    validate_new_order(&draft)?;

    let order = admin.with_stores_mut(|s| s.orders.add(draft).clone());
    admin.persist().await;

    info!(id = %order.id, total = %order.total, "Order created");
    Ok(order)
}

/// `None` when the id is unknown.
pub async fn update_order(admin: &AdminState, id: &str, patch: OrderPatch) -> Option<Order> {
    debug!(id = %id, "update_order command");

    let updated = admin.with_stores_mut(|s| s.orders.update(id, patch).cloned());
    if updated.is_some() {
        admin.persist().await;
        info!(id = %id, "Order updated");
    }
    updated
}

/// Sets an order's status from its string form (`"completed"`, ...).
///
/// Any status may be set from any other.
pub async fn update_order_status(
    admin: &AdminState,
    id: &str,
    status: &str,
) -> Result<Option<Order>, ApiError> {
    debug!(id = %id, status = %status, "update_order_status command");
    let status: OrderStatus = status.parse()?;
    Ok(update_order(admin, id, OrderPatch::status(status)).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;
    use qrpos_core::{Money, OrderItem, PaymentMethod};

    fn draft(items: Vec<OrderItem>) -> NewOrder {
        NewOrder {
            date: Utc::now(),
            method: PaymentMethod::Transfer,
            status: OrderStatus::Pending,
            items,
        }
    }

    #[tokio::test]
    async fn test_create_order_computes_total() {
        let admin = AdminState::default();

        let order = create_order(
            &admin,
            draft(vec![OrderItem {
                product_id: "2".to_string(),
                quantity: 3,
                price: Money::from_major(320),
            }]),
        )
        .await
        .unwrap();

        assert_eq!(order.total, Money::from_major(960));
        assert_eq!(get_order(&admin, &order.id).unwrap(), order);
        assert_eq!(list_orders(&admin).len(), 4);
    }

    #[tokio::test]
    async fn test_create_order_rejects_empty() {
        let admin = AdminState::default();
        let err = create_order(&admin, draft(vec![])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_update_order_status() {
        let admin = AdminState::default();

        let order = update_order_status(&admin, "ORD003", "completed")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.total, Money::from_major(840));

        assert!(update_order_status(&admin, "ORD404", "cancelled")
            .await
            .unwrap()
            .is_none());

        let err = update_order_status(&admin, "ORD003", "refunded")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_update_order_method() {
        let admin = AdminState::default();
        let order = update_order(
            &admin,
            "ORD002",
            OrderPatch {
                method: Some(PaymentMethod::Card),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(order.method, PaymentMethod::Card);
        assert_eq!(order.status, OrderStatus::Completed);
    }
}
