//! # State Module
//!
//! State containers the commands operate on. Each command takes only the
//! containers it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   AdminState     │  │  CashierState    │  │    ConfigState       │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Mutex<          │  │  Arc<Mutex<      │  │  store name          │  │
//! │  │   Catalog +      │  │    CartStore     │  │  currency            │  │
//! │  │   OrderBook>     │  │  >>              │  │  utc offset          │  │
//! │  │  Option<Database>│  │  ScanCatalog     │  │  [storage]           │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • AdminState: one Mutex over both stores; saved after the lock drops  │
//! │  • CashierState: Arc<Mutex<T>>, never persisted                        │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admin;
mod cashier;
mod config;

pub use admin::{AdminState, AdminStores};
pub use cashier::CashierState;
pub use config::{ConfigState, StorageConfig, CONFIG_FILE_NAME, DATABASE_FILE_NAME};
