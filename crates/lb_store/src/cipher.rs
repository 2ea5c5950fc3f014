//! Entry-level encrypt/decrypt: record <-> base64 token.
//!
//! Token format: base64url-nopad( nonce || AEAD ciphertext+tag ) over the
//! canonical serde_json bytes of the record, with a versioned AAD domain
//! string so tokens from other contexts (or a future format revision) never
//! authenticate here.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use lb_crypto::{aead, DerivedKey};
use thiserror::Error;

use crate::error::StoreError;
use crate::models::VaultRecord;

/// AAD domain string; bump the version suffix on any format change.
const TOKEN_AAD: &[u8] = b"lockbox-entry-v1";

/// Uniform, opaque decryption failure.
///
/// Deliberately carries no detail: a bad tag, bad base64, truncated token
/// and malformed plaintext are indistinguishable to the caller, so the
/// failure signal leaks nothing about why an entry did not decrypt.
#[derive(Debug, Error)]
#[error("entry decryption failed")]
pub struct DecryptFailed;

/// Seam between the service and the concrete token construction. Pure
/// functions of (record, key); no global key state.
pub trait EntryCipher: Send + Sync {
    fn encrypt(&self, record: &VaultRecord, key: &DerivedKey) -> Result<String, StoreError>;
    fn decrypt(&self, token: &str, key: &DerivedKey) -> Result<VaultRecord, DecryptFailed>;
}

/// Production cipher: serde_json + XChaCha20-Poly1305 + base64url.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCipher;

impl EntryCipher for TokenCipher {
    fn encrypt(&self, record: &VaultRecord, key: &DerivedKey) -> Result<String, StoreError> {
        let plaintext = serde_json::to_vec(record)?;
        let sealed = aead::seal(&key.0, &plaintext, TOKEN_AAD)?;
        Ok(URL_SAFE_NO_PAD.encode(sealed))
    }

    fn decrypt(&self, token: &str, key: &DerivedKey) -> Result<VaultRecord, DecryptFailed> {
        let sealed = URL_SAFE_NO_PAD.decode(token).map_err(|_| DecryptFailed)?;
        let plaintext = aead::open(&key.0, &sealed, TOKEN_AAD).map_err(|_| DecryptFailed)?;
        serde_json::from_slice(&plaintext).map_err(|_| DecryptFailed)
    }
}
