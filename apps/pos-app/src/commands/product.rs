//! # Product Commands
//!
//! Catalog management for the admin dashboard.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Products page                                                          │
//! │                                                                         │
//! │  [+ Add] ──► create_product(form) ──► validate ──► add ──► persist      │
//! │  [Edit]  ──► update_product(id, patch) ─► validate ─► update ─► persist │
//! │  [Del]   ──► (confirm in UI) ──► delete_product(id) ──► persist         │
//! │  [QR]    ──► product_qr(id) ──► {"type":"product","id":"..."}           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AdminState;
use qrpos_core::qr::QrPayload;
use qrpos_core::validation::{validate_new_product, validate_product_patch};
use qrpos_core::{NewProduct, Product, ProductPatch};

pub fn list_products(admin: &AdminState) -> Vec<Product> {
    debug!("list_products command");
    admin.with_stores(|s| s.catalog.products().to_vec())
}

pub fn get_product(admin: &AdminState, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");
    admin
        .with_stores(|s| s.catalog.get(id).cloned())
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Adds a product from the product form.
///
/// Blank description/category become empty. Duplicate names are accepted.
pub async fn create_product(admin: &AdminState, form: NewProduct) -> Result<Product, ApiError> {
    debug!(name = %form.name, "create_product command");

    let form = form.normalized();
    validate_new_product(&form)?;

    let product = admin.with_stores_mut(|s| s.catalog.add(form).clone());
    admin.persist().await;

    info!(id = %product.id, name = %product.name, "Product created");
    Ok(product)
}

/// Applies an edit. `Ok(None)` when the id is unknown; nothing changes then.
///
/// Blank description/category clear the field, as on create.
pub async fn update_product(
    admin: &AdminState,
    id: &str,
    patch: ProductPatch,
) -> Result<Option<Product>, ApiError> {
    debug!(id = %id, "update_product command");

    let patch = patch.normalized();
    validate_product_patch(&patch)?;

    let updated = admin.with_stores_mut(|s| s.catalog.update(id, patch).cloned());
    if updated.is_some() {
        admin.persist().await;
        info!(id = %id, "Product updated");
    }

    Ok(updated)
}

/// Deletes a product. Returns whether one was removed.
///
/// Recorded order lines that reference it are left alone.
pub async fn delete_product(admin: &AdminState, id: &str) -> bool {
    debug!(id = %id, "delete_product command");

    let removed = admin.with_stores_mut(|s| s.catalog.delete(id));
    match removed {
        Some(product) => {
            admin.persist().await;
            info!(id = %id, name = %product.name, "Product deleted");
            true
        }
        None => false,
    }
}

/// The text to render into a product's QR code.
pub fn product_qr(admin: &AdminState, id: &str) -> Result<String, ApiError> {
    debug!(id = %id, "product_qr command");
    let product = get_product(admin, id)?;
    Ok(QrPayload::product(&product).encode()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use qrpos_core::Money;

    fn form(name: &str, price: Money) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
            stock: 5,
            description: Some(String::new()),
            category: None,
        }
    }

    #[tokio::test]
    async fn test_create_product_validates_and_normalizes() {
        let admin = AdminState::default();

        let product = create_product(&admin, form("  Thai Milk Tea ", Money::from_major(55)))
            .await
            .unwrap();
        assert_eq!(product.name, "Thai Milk Tea");
        assert_eq!(product.description, None);
        assert_eq!(list_products(&admin).len(), 4);

        let err = create_product(&admin, form("   ", Money::from_major(55)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = create_product(&admin, form("Free Sample", Money::zero()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list_products(&admin).len(), 4);
    }

    #[tokio::test]
    async fn test_update_product() {
        let admin = AdminState::default();

        let updated = update_product(
            &admin,
            "3",
            ProductPatch {
                stock: Some(12),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(updated.stock, 12);
        assert_eq!(updated.name, "Artisan Chocolate");

        let missing = update_product(&admin, "nope", ProductPatch::default())
            .await
            .unwrap();
        assert!(missing.is_none());

        let invalid = update_product(
            &admin,
            "3",
            ProductPatch {
                price: Some(Money::from_minor(-1)),
                ..Default::default()
            },
        )
        .await;
        assert!(invalid.is_err());
    }

    #[tokio::test]
    async fn test_update_product_blank_description_clears_it() {
        let admin = AdminState::default();

        let updated = update_product(
            &admin,
            "1",
            ProductPatch {
                name: Some(" Espresso Beans  ".to_string()),
                description: Some(Some("   ".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.name, "Espresso Beans");
        assert_eq!(updated.description, None);
        assert_eq!(updated.category.as_deref(), Some("Beverages"));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let admin = AdminState::default();

        assert!(delete_product(&admin, "1").await);
        assert!(!delete_product(&admin, "1").await);

        let err = get_product(&admin, "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_product_qr() {
        let admin = AdminState::default();
        assert_eq!(
            product_qr(&admin, "2").unwrap(),
            r#"{"type":"product","id":"2"}"#
        );
        assert_eq!(
            product_qr(&admin, "missing").unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
