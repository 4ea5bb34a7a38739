//! # Commands Module
//!
//! Everything the admin dashboard and the cashier page can ask for.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── product.rs    ◄─── Catalog CRUD, product QR
//! ├── order.rs      ◄─── Admin orders, status changes
//! ├── dashboard.rs  ◄─── KPI cards
//! ├── cart.rs       ◄─── Cart manipulation
//! ├── scan.rs       ◄─── Manual code entry
//! ├── checkout.rs   ◄─── Payment QR, complete payment
//! └── config.rs     ◄─── Configuration, price formatting
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  front-end action                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  create_product(&ctx.admin, form).await                                 │
//! │         │   ├── validate (qrpos_core::validation)                       │
//! │         │   ├── mutate under the lock                                   │
//! │         │   └── persist (best effort)                                   │
//! │         ▼                                                               │
//! │  Result<Product, ApiError> ──► JSON to the front-end                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it needs. Commands that write the
//! admin snapshot are `async`; everything else is synchronous.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod dashboard;
pub mod order;
pub mod product;
pub mod scan;
