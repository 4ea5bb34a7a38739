//! # Validation Module
//!
//! Form-level checks applied by the command layer before a store is
//! touched. The stores themselves accept anything.
//!
//! ## Usage
//! ```rust
//! use qrpos_core::validation::{validate_product_name, validate_scan_code};
//!
//! assert!(validate_product_name("Organic Tea Set").is_ok());
//! assert_eq!(validate_scan_code(" 001 ").unwrap(), "001");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{NewOrder, NewProduct, ProductPatch};

/// Longest accepted product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Most units of one product a single cart line may hold.
pub const MAX_CART_QUANTITY: i64 = 999;

// =============================================================================
// Product Form
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Price must be strictly greater than zero.
pub fn validate_product_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

pub fn validate_new_product(form: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&form.name)?;
    validate_product_price(form.price)
}

/// Checks only the fields the patch sets.
pub fn validate_product_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_product_name(name)?;
    }
    if let Some(price) = patch.price {
        validate_product_price(price)?;
    }
    Ok(())
}

// =============================================================================
// Order Draft
// =============================================================================

/// An order needs at least one line, and every line a positive quantity
/// and a non-negative unit price.
pub fn validate_new_order(draft: &NewOrder) -> ValidationResult<()> {
    if draft.items.is_empty() {
        return Err(ValidationError::required("items"));
    }

    for item in &draft.items {
        if item.product_id.trim().is_empty() {
            return Err(ValidationError::required("productId"));
        }
        if item.quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }
        if item.price.is_negative() {
            return Err(ValidationError::MustBePositive {
                field: "price".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Cashier Inputs
// =============================================================================

pub fn validate_payment_method_label(label: &str) -> ValidationResult<()> {
    if label.trim().is_empty() {
        return Err(ValidationError::required("paymentMethod"));
    }
    Ok(())
}

/// Validates a quantity typed into a cart line.
///
/// Zero or less is accepted: it means "remove the line".
pub fn validate_cart_quantity(qty: i64) -> ValidationResult<()> {
    if qty > MAX_CART_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_CART_QUANTITY,
        });
    }
    Ok(())
}

/// Returns the trimmed code, or an error if nothing was entered.
pub fn validate_scan_code(code: &str) -> ValidationResult<&str> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ValidationError::required("code"));
    }
    Ok(code)
}

// =============================================================================
// Unit Tests
// =============================================================================
