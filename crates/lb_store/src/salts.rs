//! Per-user salt lifecycle: created once, read many times, never updated.

use async_trait::async_trait;
use sqlx::SqlitePool;

use lb_crypto::kdf::{generate_salt, SALT_LEN};

use crate::error::StoreError;

/// Salt persistence seam.
#[async_trait]
pub trait SaltStore: Send + Sync {
    /// Return the user's salt, creating it on first use.
    ///
    /// Must be atomic: concurrent first-time callers for the same user must
    /// converge on a single salt, since whichever candidate loses would
    /// silently orphan any ciphertext already written under it.
    async fn get_or_create(&self, user_id: i64) -> Result<[u8; SALT_LEN], StoreError>;
}

pub struct SqliteSaltStore {
    pool: SqlitePool,
}

impl SqliteSaltStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaltStore for SqliteSaltStore {
    async fn get_or_create(&self, user_id: i64) -> Result<[u8; SALT_LEN], StoreError> {
        // Insert-if-absent on the primary key, then read back whichever salt
        // won. A racing writer's candidate is discarded by ON CONFLICT.
        let candidate = generate_salt();
        sqlx::query(
            "INSERT INTO user_salts (user_id, salt) VALUES (?, ?) \
             ON CONFLICT(user_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(candidate.as_slice())
        .execute(&self.pool)
        .await?;

        let stored: Vec<u8> = sqlx::query_scalar("SELECT salt FROM user_salts WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        stored
            .try_into()
            .map_err(|_| StoreError::MalformedSalt { user_id })
    }
}
