//! # Admin State
//!
//! The catalog and order stores behind the admin dashboard, plus the
//! optional database the pair is persisted to.
//!
//! ## Persistence Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Admin Mutation                                       │
//! │                                                                         │
//! │  command ──► with_stores_mut(|s| s.catalog.add(..))   ◄── lock held     │
//! │                         │                                               │
//! │                         ▼  lock released                                │
//! │              persist().await                                            │
//! │                ├── snapshot under a short lock                          │
//! │                └── db.snapshots().save(key, &snapshot)                  │
//! │                         │                                               │
//! │                         └── failure? warn! and carry on                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock is a `std::sync::Mutex` and is never held across an `.await`.
//! Saves are serialized by a separate async lock, taken before the snapshot,
//! so a later save always writes a state at least as new as an earlier one.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::Mutex as AsyncMutex;
use tracing::{info, warn};

use qrpos_core::{fixtures, AdminSnapshot, Catalog, OrderBook};
use qrpos_db::{Database, DbError, DbResult};

/// The two admin stores, always locked together.
#[derive(Debug, Clone, Default)]
pub struct AdminStores {
    pub catalog: Catalog,
    pub orders: OrderBook,
}

impl AdminStores {
    pub fn from_snapshot(snapshot: AdminSnapshot) -> Self {
        AdminStores {
            catalog: Catalog::from_products(snapshot.products),
            orders: OrderBook::from_orders(snapshot.orders),
        }
    }

    pub fn snapshot(&self) -> AdminSnapshot {
        AdminSnapshot {
            products: self.catalog.products().to_vec(),
            orders: self.orders.orders().to_vec(),
        }
    }
}

/// Thread-safe admin state.
#[derive(Debug)]
pub struct AdminState {
    stores: Mutex<AdminStores>,
    db: Option<Database>,
    storage_key: String,
    save_lock: AsyncMutex<()>,
}

impl AdminState {
    /// State that is never written anywhere.
    pub fn in_memory(snapshot: AdminSnapshot) -> Self {
        AdminState {
            stores: Mutex::new(AdminStores::from_snapshot(snapshot)),
            db: None,
            storage_key: qrpos_core::DEFAULT_STORAGE_KEY.to_string(),
            save_lock: AsyncMutex::new(()),
        }
    }

    /// Rehydrates from the snapshot stored under `key`.
    ///
    /// A missing key starts from the fixtures. So does a blob that no longer
    /// decodes; it is overwritten on the next save.
    pub async fn hydrate(db: Database, key: impl Into<String>) -> DbResult<Self> {
        let key = key.into();

        let snapshot = match db.snapshots().load::<AdminSnapshot>(&key).await {
            Ok(Some(snapshot)) => {
                info!(
                    key = %key,
                    products = snapshot.products.len(),
                    orders = snapshot.orders.len(),
                    "Admin state restored"
                );
                snapshot
            }
            Ok(None) => {
                info!(key = %key, "No stored admin state, starting from fixtures");
                fixtures::mock_snapshot()
            }
            Err(DbError::Serialization(e)) => {
                warn!(key = %key, error = %e, "Stored admin state is unreadable, starting from fixtures");
                fixtures::mock_snapshot()
            }
            Err(e) => return Err(e),
        };

        Ok(AdminState {
            stores: Mutex::new(AdminStores::from_snapshot(snapshot)),
            db: Some(db),
            storage_key: key,
            save_lock: AsyncMutex::new(()),
        })
    }

    pub fn is_persistent(&self) -> bool {
        self.db.is_some()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn lock(&self) -> MutexGuard<'_, AdminStores> {
        self.stores.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with read access to the stores.
    pub fn with_stores<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AdminStores) -> R,
    {
        f(&self.lock())
    }

    /// Runs `f` with write access to the stores. Does not persist.
    pub fn with_stores_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AdminStores) -> R,
    {
        f(&mut self.lock())
    }

    /// Writes the current snapshot, if a database is attached.
    ///
    /// Failures are logged and swallowed: the in-memory change stands.
    pub async fn persist(&self) {
        let Some(db) = &self.db else {
            return;
        };

        let _saving = self.save_lock.lock().await;
        let snapshot = self.with_stores(AdminStores::snapshot);
        if let Err(e) = db.snapshots().save(&self.storage_key, &snapshot).await {
            warn!(key = %self.storage_key, error = %e, "Failed to persist admin state");
        }
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::in_memory(fixtures::mock_snapshot())
    }
}
