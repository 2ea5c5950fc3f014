//! Database abstraction over SQLite via sqlx.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool};

use crate::error::StoreError;
use crate::migrations::run::run_migrations;

/// Central store handle. Cheap to clone (Arc internally).
#[derive(Clone)]
pub struct Store {
    pub pool: SqlitePool,
}

impl Store {
    /// Open (or create) the SQLite database at `db_path`.
    /// Runs all pending migrations automatically.
    ///
    /// WAL journal mode and foreign-key enforcement are configured at
    /// connection time here, NOT inside a migration: SQLite forbids changing
    /// `journal_mode` inside a transaction and sqlx wraps every migration
    /// in one.
    pub async fn open(db_path: &Path) -> Result<Self, StoreError> {
        let opts = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(opts).await?;
        run_migrations(&pool).await?;

        tracing::debug!(path = %db_path.display(), "vault database opened");
        Ok(Self { pool })
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::{cleanup, open_temp_store};

    #[tokio::test]
    async fn open_creates_owned_tables() {
        let (store, db_path) = open_temp_store().await;

        for table in ["users", "user_salts", "vault"] {
            let count: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            )
            .bind(table)
            .fetch_one(&store.pool)
            .await
            .expect("query sqlite_master");
            assert_eq!(count, 1, "{table} table should exist");
        }

        cleanup(&db_path);
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let (store, db_path) = open_temp_store().await;

        // No users row with id 7 exists, so the cascade FK must reject this.
        let res = sqlx::query("INSERT INTO vault (user_id, ciphertext) VALUES (7, 'ct')")
            .execute(&store.pool)
            .await;
        assert!(res.is_err());

        cleanup(&db_path);
    }
}
