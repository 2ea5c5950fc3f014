use thiserror::Error;

/// Fatal errors for a vault operation.
///
/// Decryption failure is deliberately NOT represented here: a wrong password
/// or foreign-salt ciphertext is an entry-scoped, recoverable outcome
/// ([`crate::cipher::DecryptFailed`]) that the service converts into an
/// absent `decrypted` field, never into an operation failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("A vault password is required for write operations")]
    MissingPassword,

    #[error("Stored salt for user {user_id} is malformed")]
    MalformedSalt { user_id: i64 },

    #[error("Key derivation task failed: {0}")]
    KeyDerivation(String),

    #[error("Crypto error: {0}")]
    Crypto(#[from] lb_crypto::CryptoError),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
