//! lb_store — Per-user encrypted record store over SQLite
//!
//! # Encryption strategy
//! SQLite does NOT natively encrypt. We use application-level encryption:
//! - Entry bodies are stored as XChaCha20-Poly1305 ciphertext, base64-encoded.
//! - The entry key is derived per operation from the caller's vault password
//!   and a per-user salt via PBKDF2-HMAC-SHA256; it is never persisted and
//!   never cached across operations.
//! - Row metadata (ids, timestamps) is stored in plaintext to allow
//!   efficient queries. The repository never interprets ciphertext.
//!
//! # Tenant isolation
//! Every query is scoped by `user_id`. An entry owned by another user is
//! indistinguishable from a nonexistent one.
//!
//! # Migration
//! SQLx migrations in `migrations/` are run on first open.

pub mod cipher;
pub mod db;
pub mod error;
pub mod identity;
pub mod migrations;
pub mod models;
pub mod repository;
pub mod salts;
pub mod service;

pub use cipher::{DecryptFailed, EntryCipher, TokenCipher};
pub use db::Store;
pub use error::StoreError;
pub use identity::{AuthRejected, Identity, IdentityInterceptor};
pub use models::{EntryView, VaultEntryRow, VaultRecord};
pub use repository::{SqliteVaultRepository, VaultRepository};
pub use salts::{SaltStore, SqliteSaltStore};
pub use service::VaultService;

#[cfg(test)]
pub(crate) mod testutil {
    use std::path::PathBuf;

    use crate::db::Store;

    /// Open a store backed by a throwaway SQLite file under /tmp.
    pub async fn open_temp_store() -> (Store, PathBuf) {
        let db_path = PathBuf::from(format!("/tmp/lb-store-test-{}.db", uuid::Uuid::new_v4()));
        let store = Store::open(&db_path).await.expect("open store");
        (store, db_path)
    }

    /// Insert a row into the identity-owned users table so cascade foreign
    /// keys accept vault rows for `user_id`.
    pub async fn seed_user(store: &Store, user_id: i64) {
        sqlx::query("INSERT INTO users (id, email, password_hash) VALUES (?, ?, 'x')")
            .bind(user_id)
            .bind(format!("user{user_id}@example.com"))
            .execute(&store.pool)
            .await
            .expect("seed user");
    }

    pub fn cleanup(db_path: &PathBuf) {
        let _ = std::fs::remove_file(db_path);
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }
}
