//! # Checkout Commands
//!
//! Turns the cashier's cart into a recorded order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  [Pay]  ──► payment_qr() ──► {"type":"payment","total":..,"ts":".."}    │
//! │                 │                                                       │
//! │                 ▼  customer scans, cashier confirms                     │
//! │  [Done] ──► complete_payment("QR")                                      │
//! │                 ├── checkout(method)   ┐                                │
//! │                 └── clear()            ┘ one lock                       │
//! │                 ▼                                                       │
//! │             CashierOrder appended to the session history                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cashier orders live only for the session; they are never persisted and
//! never reach the admin order list.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::CashierState;
use qrpos_core::qr::QrPayload;
use qrpos_core::validation::validate_payment_method_label;
use qrpos_core::{CashierOrder, Money};

/// Payment QR text plus the total it encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQr {
    pub payload: String,
    pub total: Money,
}

fn empty_cart() -> ApiError {
    ApiError::cart("Cart is empty")
}

/// Builds the payment QR for the current cart total.
pub fn payment_qr(cashier: &CashierState) -> Result<PaymentQr, ApiError> {
    debug!("payment_qr command");

    let total = cashier.with_cart(|c| (!c.is_empty()).then(|| c.total()));
    let total = total.ok_or_else(empty_cart)?;

    let payload = QrPayload::payment(total, Utc::now()).encode()?;
    Ok(PaymentQr { payload, total })
}

/// Records the cart as an order under `method` and empties the cart.
pub fn complete_payment(cashier: &CashierState, method: &str) -> Result<CashierOrder, ApiError> {
    debug!(method = %method, "complete_payment command");
    validate_payment_method_label(method)?;
    let method = method.trim();

    let order = cashier.with_cart_mut(|c| {
        if c.is_empty() {
            return Err(empty_cart());
        }
        let order = c.checkout(method);
        c.clear();
        Ok(order)
    })?;

    info!(id = %order.id, total = %order.total, method = %method, "Payment completed");
    Ok(order)
}

/// Orders completed at this till since startup, oldest first.
pub fn list_cashier_orders(cashier: &CashierState) -> Vec<CashierOrder> {
    debug!("list_cashier_orders command");
    cashier.with_cart(|c| c.orders().to_vec())
}
