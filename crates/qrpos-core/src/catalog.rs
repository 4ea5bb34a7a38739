//! # Catalog Store
//!
//! The admin product list.
//!
//! ```text
//! add(NewProduct) ──► fresh id + timestamps ──► appended
//! update(id, ProductPatch) ──► merged, updatedAt refreshed ──► Some(&Product)
//!                          └─► unknown id ──► None (no-op)
//! delete(id) ──► Some(Product) / None
//! ```
//!
//! The store does not validate. Form checks live in [`crate::validation`]
//! and are applied by the caller.

use chrono::Utc;
use std::collections::HashSet;

use crate::types::{NewProduct, Product, ProductPatch};

/// Ordered, id-unique product collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a seeded or persisted list.
    ///
    /// When two records share an id, the first one wins.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut seen = HashSet::with_capacity(products.len());
        let products = products
            .into_iter()
            .filter(|p| seen.insert(p.id.clone()))
            .collect();
        Catalog { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Appends a new product with a fresh id. Duplicate names are allowed.
    pub fn add(&mut self, form: NewProduct) -> &Product {
        let now = Utc::now();
        let index = self.products.len();
        self.products.push(Product {
            id: crate::new_id(),
            name: form.name,
            price: form.price,
            stock: form.stock,
            description: form.description,
            category: form.category,
            created_at: now,
            updated_at: now,
        });
        &self.products[index]
    }

    /// Merges `patch` into the product with `id`.
    ///
    /// Returns `None` and changes nothing when the id is unknown.
    pub fn update(&mut self, id: &str, patch: ProductPatch) -> Option<&Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        patch.apply_to(product);
        product.updated_at = Utc::now();
        Some(product)
    }

    /// Removes the product with `id`.
    ///
    /// Orders that sold it keep their line items as recorded.
    pub fn delete(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
