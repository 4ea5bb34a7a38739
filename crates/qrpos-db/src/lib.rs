//! # qrpos-db: Snapshot Persistence for QR POS
//!
//! Durable key-value storage on SQLite, used to keep the admin dashboard's
//! catalog and orders across restarts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        QR POS Data Flow                                 │
//! │                                                                         │
//! │  create_product command ──► Catalog::add ──► AdminState::persist       │
//! │                                                     │                   │
//! │  ┌──────────────────────────────────────────────────▼──────────────┐   │
//! │  │                     qrpos-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌─────────────┐  │   │
//! │  │   │   Database    │    │ SnapshotRepository │  │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ put/get/save/load  │  │ (embedded)  │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file: <data dir>/qrpos.db, table kv_store                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qrpos_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./qrpos.db")).await?;
//! db.snapshots().save("store", &snapshot).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::snapshot::SnapshotRepository;
