//! # qrpos-core: Pure Business Logic for QR POS
//!
//! The state core shared by the admin dashboard and the cashier page.
//! Everything here is a plain in-memory collection plus pure derivations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         QR POS Architecture                             │
//! │                                                                         │
//! │  ┌───────────────────────────┐     ┌───────────────────────────────┐   │
//! │  │  Admin Dashboard (web)    │     │  Cashier Page (web)           │   │
//! │  │  products • orders • KPIs │     │  scan • cart • pay by QR      │   │
//! │  └─────────────┬─────────────┘     └───────────────┬───────────────┘   │
//! │                └──────────────┬────────────────────┘                    │
//! │                               ▼                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 pos-app (state + commands)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ qrpos-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │ catalog  │ │  orders  │ │   cart   │ │    qr    │          │   │
//! │  │   │ Catalog  │ │OrderBook │ │CartStore │ │QrPayload │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            qrpos-db (snapshot persistence, SQLite)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Product, Order, CartItem, CashierOrder)
//! - [`money`] - Integer money in satang
//! - [`catalog`] - Catalog store (admin products)
//! - [`orders`] - Order store (admin orders)
//! - [`cart`] - Cart store and checkout (cashier)
//! - [`qr`] - QR payload encoding
//! - [`scan`] - Simulated scanning against a fixed catalog
//! - [`dashboard`] - Admin KPIs
//! - [`fixtures`] - Mock seed data
//! - [`validation`] - Form-level checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use qrpos_core::cart::CartStore;
//! use qrpos_core::money::Money;
//!
//! let mut store = CartStore::new();
//! store.add_item("001", "Hot coffee", Money::from_major(45));
//! store.add_item("001", "Hot coffee", Money::from_major(45));
//! store.add_item("002", "Iced tea", Money::from_major(35));
//!
//! assert_eq!(store.total(), Money::from_major(125));
//! assert_eq!(store.item_count(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod money;
pub mod orders;
pub mod qr;
pub mod scan;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartStore;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use orders::OrderBook;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the admin snapshot is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "store";

/// Payment method label the cashier page records for QR payments.
pub const QR_PAYMENT_METHOD: &str = "QR";

/// Generates a fresh entity identifier (UUID v4).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
