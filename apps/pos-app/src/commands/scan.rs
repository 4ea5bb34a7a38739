//! # Scan Commands
//!
//! Stand-in for a barcode scanner: the cashier types a product code and it is
//! matched against the built-in scan catalog.
//!
//! ```text
//! code ──► trim ──► empty? ──► VALIDATION_ERROR
//!                     │
//!                     ▼
//!              lookup(code) ──► none ──► { matched: null, cart }   (no change)
//!                     │
//!                     ▼
//!              add_item(id, name, price) ──► { matched: {...}, cart }
//!                     │
//!                     └── line already at 999 ──► VALIDATION_ERROR
//! ```

use serde::Serialize;
use tracing::{debug, info};

use super::cart::{line_full, CartResponse};
use crate::error::ApiError;
use crate::state::CashierState;
use qrpos_core::scan::ScanProduct;
use qrpos_core::validation::validate_scan_code;

/// Outcome of a scan. An unknown code is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub matched: Option<ScanProduct>,
    pub cart: CartResponse,
}

pub fn list_scan_products(cashier: &CashierState) -> Vec<ScanProduct> {
    debug!("list_scan_products command");
    cashier.scan_catalog().products().to_vec()
}

pub fn scan_product(cashier: &CashierState, code: &str) -> Result<ScanResult, ApiError> {
    debug!(code = %code, "scan_product command");
    let code = validate_scan_code(code)?;

    let matched = cashier.scan_catalog().lookup(code).cloned();
    let cart = cashier.with_cart_mut(|c| {
        if let Some(product) = &matched {
            if !c.add_item(&product.id, &product.name, product.price) {
                return Err(line_full(&product.id));
            }
        }
        Ok(CartResponse::from(&*c))
    })?;

    match &matched {
        Some(product) => info!(code = %code, name = %product.name, "Scanned product added"),
        None => debug!(code = %code, "No product for scanned code"),
    }

    Ok(ScanResult { matched, cart })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use qrpos_core::Money;

    #[test]
    fn test_scan_known_code_adds_one_unit() {
        let cashier = CashierState::new();

        let result = scan_product(&cashier, " 001 ").unwrap();
        assert_eq!(result.matched.unwrap().name, "กาแฟร้อน");
        assert_eq!(result.cart.total, Money::from_major(45));

        let result = scan_product(&cashier, "001").unwrap();
        assert_eq!(result.cart.items.len(), 1);
        assert_eq!(result.cart.item_count, 2);
    }

    #[test]
    fn test_scan_unknown_code_is_not_an_error() {
        let cashier = CashierState::new();
        let result = scan_product(&cashier, "999").unwrap();
        assert!(result.matched.is_none());
        assert!(result.cart.items.is_empty());
    }

    #[test]
    fn test_scan_empty_code() {
        let cashier = CashierState::new();
        let err = scan_product(&cashier, "  ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_list_scan_products() {
        let cashier = CashierState::new();
        let ids: Vec<_> = list_scan_products(&cashier)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["001", "002", "003", "004", "005"]);
    }
}
