//! # Snapshot Repository
//!
//! A key-value table holding JSON text. The admin dashboard writes its whole
//! state under one key after every mutation.
//!
//! ```text
//! ┌──────────┬──────────────────────────────────────┬──────────────────────┐
//! │ key      │ value                                │ updated_at           │
//! ├──────────┼──────────────────────────────────────┼──────────────────────┤
//! │ "store"  │ {"products":[...],"orders":[...]}    │ 2024-01-21T09:14:...  │
//! └──────────┴──────────────────────────────────────┴──────────────────────┘
//! ```

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for the `kv_store` table.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    pool: SqlitePool,
}

impl SnapshotRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SnapshotRepository { pool }
    }

    /// Inserts or replaces the value under `key`.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing snapshot");

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Removes `key`. Returns whether a row existed.
    pub async fn delete(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }

    pub async fn contains(&self, key: &str) -> DbResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Serializes `value` as JSON and stores it under `key`.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> DbResult<()> {
        let json = serde_json::to_string(value)?;
        self.put(key, &json).await
    }

    /// Loads and decodes the value under `key`.
    ///
    /// `Ok(None)` when the key is absent; `Err(DbError::Serialization)` when
    /// the stored text doesn't decode as `T`.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> DbResult<Option<T>> {
        match self.get(key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::{Database, DbConfig};
    use qrpos_core::fixtures;
    use qrpos_core::{AdminSnapshot, Catalog, NewProduct, Money};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_put_get_overwrite() {
        let repo = db().await.snapshots();

        assert_eq!(repo.get("store").await.unwrap(), None);

        repo.put("store", "{}").await.unwrap();
        repo.put("store", r#"{"products":[]}"#).await.unwrap();

        assert_eq!(
            repo.get("store").await.unwrap().as_deref(),
            Some(r#"{"products":[]}"#)
        );
        assert_eq!(repo.keys().await.unwrap(), vec!["store".to_string()]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = db().await.snapshots();
        repo.put("a", "1").await.unwrap();

        assert!(repo.delete("a").await.unwrap());
        assert!(!repo.delete("a").await.unwrap());
        assert!(!repo.contains("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_admin_snapshot_round_trip() {
        let repo = db().await.snapshots();

        let mut catalog = Catalog::from_products(fixtures::mock_products());
        catalog.add(NewProduct {
            name: "ชาไทย".to_string(),
            price: Money::from_minor(4550),
            stock: 12,
            description: None,
            category: Some("Beverages".to_string()),
        });
        let snapshot = AdminSnapshot {
            products: catalog.into_products(),
            orders: fixtures::mock_orders(),
        };

        repo.save("store", &snapshot).await.unwrap();
        let loaded: AdminSnapshot = repo.load("store").await.unwrap().unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn test_load_missing_and_corrupt() {
        let repo = db().await.snapshots();

        let missing: Option<AdminSnapshot> = repo.load("store").await.unwrap();
        assert!(missing.is_none());

        repo.put("store", "not json").await.unwrap();
        let err = repo.load::<AdminSnapshot>("store").await.unwrap_err();
        assert!(matches!(err, DbError::Serialization(_)));
    }
}
