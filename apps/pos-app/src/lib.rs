//! # QR POS Application Library
//!
//! State containers and commands behind the admin dashboard and the cashier
//! page. A host (web server, desktop shell, test) builds an [`AppContext`]
//! once and hands its parts to the command functions.
//!
//! ## Module Organization
//! ```text
//! qrpos_app/
//! ├── lib.rs          ◄─── You are here (bootstrap & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── admin.rs    ◄─── Catalog + orders, snapshot persistence
//! │   ├── cashier.rs  ◄─── Cart, scan catalog
//! │   └── config.rs   ◄─── pos.toml + QRPOS_* overrides
//! ├── commands/
//! │   ├── product.rs  ◄─── Catalog CRUD, product QR
//! │   ├── order.rs    ◄─── Admin orders
//! │   ├── dashboard.rs◄─── KPI cards
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── scan.rs     ◄─── Manual code entry
//! │   ├── checkout.rs ◄─── Payment QR, complete payment
//! │   └── config.rs   ◄─── Config, price formatting
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use qrpos_app::{commands, state::ConfigState, AppContext};
//!
//! # async fn run() -> Result<(), qrpos_db::DbError> {
//! qrpos_app::init_tracing();
//!
//! let ctx = AppContext::bootstrap(ConfigState::load_or_default(None)).await?;
//! let summary = commands::dashboard::get_dashboard(&ctx.admin, &ctx.config);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use qrpos_core::fixtures;
use qrpos_db::{Database, DbConfig, DbResult};
use state::{AdminState, CashierState, ConfigState};

/// Everything the commands need, built once at startup.
#[derive(Debug)]
pub struct AppContext {
    pub config: ConfigState,
    pub admin: AdminState,
    pub cashier: CashierState,
}

impl AppContext {
    /// Builds the state containers.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │                       Application Startup                               │
    /// │                                                                         │
    /// │  1. Resolve Database Path ────────────────────────────────────────────► │
    /// │     • [storage] database_path, QRPOS_DB_PATH, or the data directory     │
    /// │     • storage disabled? skip to 3 with in-memory fixtures               │
    /// │                                                                         │
    /// │  2. Connect & Rehydrate ──────────────────────────────────────────────► │
    /// │     • SQLite with WAL mode, pending migrations applied                  │
    /// │     • snapshot under [storage] key, else fixtures                       │
    /// │                                                                         │
    /// │  3. Initialize State Objects ─────────────────────────────────────────► │
    /// │     • AdminState: catalog + orders (+ database)                         │
    /// │     • CashierState: empty cart, built-in scan catalog                   │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Failing to open or migrate the database is fatal. Later save failures
    /// are not.
    pub async fn bootstrap(config: ConfigState) -> DbResult<Self> {
        let db_path = config
            .storage
            .enabled
            .then(|| config.database_path())
            .flatten();

        let admin = match db_path {
            Some(path) => {
                info!(path = %path.display(), "Opening snapshot storage");
                let db = Database::new(DbConfig::new(path)).await?;
                AdminState::hydrate(db, config.storage.key.clone()).await?
            }
            None => {
                info!("Snapshot storage disabled, admin state is in memory only");
                AdminState::in_memory(fixtures::mock_snapshot())
            }
        };

        info!(store = %config.store_name, persistent = admin.is_persistent(), "State initialized");

        Ok(AppContext {
            config,
            admin,
            cashier: CashierState::new(),
        })
    }

    /// Fixture-backed state with nothing written to disk.
    pub fn in_memory(config: ConfigState) -> Self {
        AppContext {
            config,
            admin: AdminState::in_memory(fixtures::mock_snapshot()),
            cashier: CashierState::new(),
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=qrpos_app=trace` - Trace the command layer only
/// - Default: INFO, DEBUG for the qrpos crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,qrpos_app=debug,qrpos_core=debug,qrpos_db=debug,sqlx=warn")
    });

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::{create_product, list_products};
    use qrpos_core::{Money, NewProduct};
    use std::path::PathBuf;

    fn config_with(db: Option<&str>, enabled: bool) -> ConfigState {
        let mut config = ConfigState::default();
        config.storage.enabled = enabled;
        config.storage.database_path = db.map(PathBuf::from);
        config
    }

    #[tokio::test]
    async fn test_bootstrap_storage_disabled() {
        let ctx = AppContext::bootstrap(config_with(None, false)).await.unwrap();
        assert!(!ctx.admin.is_persistent());
        assert_eq!(list_products(&ctx.admin).len(), 3);
    }

    #[tokio::test]
    async fn test_bootstrap_with_database() {
        let ctx = AppContext::bootstrap(config_with(Some(":memory:"), true))
            .await
            .unwrap();
        assert!(ctx.admin.is_persistent());
        assert_eq!(ctx.admin.storage_key(), "store");

        create_product(
            &ctx.admin,
            NewProduct {
                name: "Jasmine Rice".to_string(),
                price: Money::from_major(90),
                stock: 10,
                description: None,
                category: Some("Food".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(list_products(&ctx.admin).len(), 4);
    }

    #[test]
    fn test_in_memory_context() {
        let ctx = AppContext::in_memory(ConfigState::default());
        assert!(!ctx.admin.is_persistent());
        assert!(ctx.cashier.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
