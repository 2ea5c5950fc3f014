//! CRUD over opaque ciphertext rows, strictly scoped by owning user.
//!
//! Every statement filters by `user_id`. A row owned by another user is
//! indistinguishable from a nonexistent one (`None` / `false`), never a
//! permission error: this is the tenant-isolation boundary. No cryptography
//! happens here.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::models::VaultEntryRow;

#[async_trait]
pub trait VaultRepository: Send + Sync {
    async fn list(&self, user_id: i64) -> Result<Vec<VaultEntryRow>, StoreError>;
    async fn add(&self, user_id: i64, ciphertext: &str) -> Result<VaultEntryRow, StoreError>;
    async fn get(&self, user_id: i64, entry_id: i64) -> Result<Option<VaultEntryRow>, StoreError>;
    async fn update(
        &self,
        user_id: i64,
        entry_id: i64,
        ciphertext: &str,
    ) -> Result<Option<VaultEntryRow>, StoreError>;
    async fn delete(&self, user_id: i64, entry_id: i64) -> Result<bool, StoreError>;
}

pub struct SqliteVaultRepository {
    pool: SqlitePool,
}

impl SqliteVaultRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VaultRepository for SqliteVaultRepository {
    async fn list(&self, user_id: i64) -> Result<Vec<VaultEntryRow>, StoreError> {
        let rows = sqlx::query_as(
            "SELECT id, user_id, ciphertext, created_at, updated_at \
             FROM vault WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn add(&self, user_id: i64, ciphertext: &str) -> Result<VaultEntryRow, StoreError> {
        let row = sqlx::query_as(
            "INSERT INTO vault (user_id, ciphertext) VALUES (?, ?) \
             RETURNING id, user_id, ciphertext, created_at, updated_at",
        )
        .bind(user_id)
        .bind(ciphertext)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get(&self, user_id: i64, entry_id: i64) -> Result<Option<VaultEntryRow>, StoreError> {
        let row = sqlx::query_as(
            "SELECT id, user_id, ciphertext, created_at, updated_at \
             FROM vault WHERE user_id = ? AND id = ?",
        )
        .bind(user_id)
        .bind(entry_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        user_id: i64,
        entry_id: i64,
        ciphertext: &str,
    ) -> Result<Option<VaultEntryRow>, StoreError> {
        let row = sqlx::query_as(
            "UPDATE vault SET ciphertext = ?, updated_at = datetime('now') \
             WHERE user_id = ? AND id = ? \
             RETURNING id, user_id, ciphertext, created_at, updated_at",
        )
        .bind(ciphertext)
        .bind(user_id)
        .bind(entry_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, user_id: i64, entry_id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM vault WHERE user_id = ? AND id = ?")
            .bind(user_id)
            .bind(entry_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
