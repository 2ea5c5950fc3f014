//! Password key derivation.
//!
//! `Pbkdf2Sha256` turns a (password, salt) pair into the 32-byte symmetric
//! key used to seal vault entries. PBKDF2-HMAC-SHA256 with a high fixed
//! round count keeps offline brute force expensive; the round count must
//! never change once ciphertext exists, since the derivation is part of
//! every stored token's effective key.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

/// Fixed PBKDF2 round count. Changing this invalidates all existing
/// ciphertext, exactly like rotating a user's salt would.
pub const PBKDF2_ROUNDS: u32 = 390_000;

/// Per-user salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (XChaCha20-Poly1305 key size).
pub const KEY_LEN: usize = 32;

/// 32-byte symmetric key derived from a vault password. Zeroized on drop.
/// Ephemeral: derived per operation, never persisted or cached.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKey(pub [u8; KEY_LEN]);

/// Deterministic password-to-key derivation seam.
///
/// Implementations must be pure: identical inputs always yield identical
/// keys, and distinct salts must yield unrelated keys.
pub trait KeyDerivation: Send + Sync {
    fn derive(&self, password: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey;
}

/// Production KDF: PBKDF2-HMAC-SHA256 at [`PBKDF2_ROUNDS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pbkdf2Sha256;

impl KeyDerivation for Pbkdf2Sha256 {
    fn derive(&self, password: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey {
        let mut output = [0u8; KEY_LEN];
        pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ROUNDS, &mut output);
        DerivedKey(output)
    }
}

/// Generate a fresh random 16-byte salt (call once per user; store in DB).
pub fn generate_salt() -> [u8; SALT_LEN] {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}
