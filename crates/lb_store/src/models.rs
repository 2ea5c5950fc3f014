//! Row models and the plaintext record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plaintext credential record stored inside an encrypted entry.
/// Serialized with serde_json before sealing; never written to disk as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRecord {
    pub service: String,
    pub username: String,
    pub password: String,
}

/// A vault row as persisted. `ciphertext` is opaque to the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VaultEntryRow {
    pub id: i64,
    pub user_id: i64,
    /// Base64 token: nonce || AEAD ciphertext+tag.
    pub ciphertext: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An entry as returned to the boundary layer: always the stored ciphertext,
/// plus the decrypted record when a password was supplied and the entry
/// decrypted under it.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub id: i64,
    pub ciphertext: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `None` when no password was supplied, or when decryption failed
    /// (wrong password, rotated/foreign salt, corrupted ciphertext).
    pub decrypted: Option<VaultRecord>,
}

impl EntryView {
    /// View with the ciphertext only, no decryption attempted.
    pub fn sealed(row: VaultEntryRow) -> Self {
        Self::with_decrypted(row, None)
    }

    pub fn with_decrypted(row: VaultEntryRow, decrypted: Option<VaultRecord>) -> Self {
        Self {
            id: row.id,
            ciphertext: row.ciphertext,
            created_at: row.created_at,
            updated_at: row.updated_at,
            decrypted,
        }
    }
}
