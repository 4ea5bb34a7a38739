//! # Cashier State
//!
//! The cart the cashier page works on, and the scan catalog it matches
//! typed codes against. Nothing here is persisted.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`: several commands may touch it,
//! and checkout plus clear must happen under a single lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use qrpos_core::scan::ScanCatalog;
use qrpos_core::CartStore;

/// Thread-safe cashier state.
#[derive(Debug, Clone)]
pub struct CashierState {
    cart: Arc<Mutex<CartStore>>,
    scan_catalog: ScanCatalog,
}

impl CashierState {
    /// An empty cart with the built-in scan catalog.
    pub fn new() -> Self {
        Self::with_scan_catalog(ScanCatalog::mock())
    }

    pub fn with_scan_catalog(scan_catalog: ScanCatalog) -> Self {
        CashierState {
            cart: Arc::new(Mutex::new(CartStore::new())),
            scan_catalog,
        }
    }

    pub fn scan_catalog(&self) -> &ScanCatalog {
        &self.scan_catalog
    }

    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the cart.
    ///
    /// ```rust,ignore
    /// let total = cashier.with_cart(|cart| cart.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        f(&mut self.lock())
    }
}

impl Default for CashierState {
    fn default() -> Self {
        Self::new()
    }
}
