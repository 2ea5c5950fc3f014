//! Entry-level vault operations exposed to the boundary layer.
//!
//! Write path: obtain/create salt -> derive key -> encrypt -> persist.
//! Read path with a password: fetch -> derive key from the CURRENT stored
//! salt -> attempt decrypt per entry. A decryption failure is entry-scoped:
//! it produces `decrypted: None` on that entry and never fails the
//! operation, so a list can mix decrypted and undecrypted entries.
//!
//! The caller's `user_id` comes from the identity collaborator
//! ([`crate::identity`]); this layer never verifies credentials.

use zeroize::Zeroizing;

use lb_crypto::kdf::SALT_LEN;
use lb_crypto::{DerivedKey, KeyDerivation, Pbkdf2Sha256};

use crate::cipher::{EntryCipher, TokenCipher};
use crate::db::Store;
use crate::error::StoreError;
use crate::models::{EntryView, VaultRecord};
use crate::repository::{SqliteVaultRepository, VaultRepository};
use crate::salts::{SaltStore, SqliteSaltStore};

pub struct VaultService<R, S, K = Pbkdf2Sha256, C = TokenCipher> {
    repo: R,
    salts: S,
    kdf: K,
    cipher: C,
}

impl VaultService<SqliteVaultRepository, SqliteSaltStore> {
    /// Service wired to the SQLite store with the production KDF and cipher.
    pub fn for_store(store: &Store) -> Self {
        Self::with_parts(
            SqliteVaultRepository::new(store.pool.clone()),
            SqliteSaltStore::new(store.pool.clone()),
            Pbkdf2Sha256,
            TokenCipher,
        )
    }
}

impl<R, S, K, C> VaultService<R, S, K, C>
where
    R: VaultRepository,
    S: SaltStore,
    K: KeyDerivation + Clone + Send + 'static,
    C: EntryCipher,
{
    pub fn with_parts(repo: R, salts: S, kdf: K, cipher: C) -> Self {
        Self {
            repo,
            salts,
            kdf,
            cipher,
        }
    }

    /// List the user's entries. With a password, attempt to decrypt each
    /// entry; individual failures surface as `decrypted: None`.
    pub async fn list_entries(
        &self,
        user_id: i64,
        password: Option<&str>,
    ) -> Result<Vec<EntryView>, StoreError> {
        let rows = self.repo.list(user_id).await?;
        let Some(password) = password else {
            return Ok(rows.into_iter().map(EntryView::sealed).collect());
        };

        // One derivation per operation: every entry for this user shares
        // the same salt, so the same key opens (or fails to open) them all.
        let key = self.derive_key(user_id, password).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let decrypted = self.try_decrypt(user_id, row.id, &row.ciphertext, &key);
                EntryView::with_decrypted(row, decrypted)
            })
            .collect())
    }

    /// Encrypt and store a new record. Writes always encrypt, so the
    /// password is mandatory here, unlike the optional read-time decrypt.
    pub async fn add_entry(
        &self,
        user_id: i64,
        record: &VaultRecord,
        password: Option<&str>,
    ) -> Result<EntryView, StoreError> {
        let password = password.ok_or(StoreError::MissingPassword)?;
        let key = self.derive_key(user_id, password).await?;
        let token = self.cipher.encrypt(record, &key)?;
        let row = self.repo.add(user_id, &token).await?;
        tracing::debug!(user_id, entry_id = row.id, "vault entry added");
        Ok(EntryView::sealed(row))
    }

    /// Fetch one entry; `None` when missing or owned by someone else.
    pub async fn get_entry(
        &self,
        user_id: i64,
        entry_id: i64,
        password: Option<&str>,
    ) -> Result<Option<EntryView>, StoreError> {
        let Some(row) = self.repo.get(user_id, entry_id).await? else {
            return Ok(None);
        };
        let Some(password) = password else {
            return Ok(Some(EntryView::sealed(row)));
        };

        let key = self.derive_key(user_id, password).await?;
        let decrypted = self.try_decrypt(user_id, row.id, &row.ciphertext, &key);
        Ok(Some(EntryView::with_decrypted(row, decrypted)))
    }

    /// Re-encrypt and overwrite an existing entry; `None` when missing or
    /// owned by someone else.
    pub async fn update_entry(
        &self,
        user_id: i64,
        entry_id: i64,
        record: &VaultRecord,
        password: Option<&str>,
    ) -> Result<Option<EntryView>, StoreError> {
        let password = password.ok_or(StoreError::MissingPassword)?;
        let key = self.derive_key(user_id, password).await?;
        let token = self.cipher.encrypt(record, &key)?;
        Ok(self
            .repo
            .update(user_id, entry_id, &token)
            .await?
            .map(EntryView::sealed))
    }

    pub async fn delete_entry(&self, user_id: i64, entry_id: i64) -> Result<bool, StoreError> {
        self.repo.delete(user_id, entry_id).await
    }

    /// Salt lookup plus key derivation. The KDF is deliberately expensive,
    /// so it runs on the blocking pool instead of stalling the executor.
    /// The key lives only for the duration of the calling operation.
    async fn derive_key(&self, user_id: i64, password: &str) -> Result<DerivedKey, StoreError> {
        let salt: [u8; SALT_LEN] = self.salts.get_or_create(user_id).await?;
        let kdf = self.kdf.clone();
        let password = Zeroizing::new(password.as_bytes().to_vec());
        tokio::task::spawn_blocking(move || kdf.derive(&password, &salt))
            .await
            .map_err(|e| StoreError::KeyDerivation(e.to_string()))
    }

    fn try_decrypt(
        &self,
        user_id: i64,
        entry_id: i64,
        token: &str,
        key: &DerivedKey,
    ) -> Option<VaultRecord> {
        match self.cipher.decrypt(token, key) {
            Ok(record) => Some(record),
            Err(_) => {
                tracing::debug!(user_id, entry_id, "entry did not decrypt under supplied key");
                None
            }
        }
    }
}
