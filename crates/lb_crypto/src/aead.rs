//! Authenticated encryption for vault entry payloads.
//!
//! XChaCha20-Poly1305 (192-bit nonce). Key size: 32 bytes. Nonce: 24 bytes
//! (random, generated per call). Tag: 16 bytes.
//!
//! Sealed wire format:
//!   [ nonce (24 bytes) | ciphertext + tag ]
//!
//! `open` verifies the Poly1305 tag before any plaintext leaves this
//! module; a tampered or truncated input fails without releasing bytes.

use chacha20poly1305::{
    aead::{Aead, AeadCore, KeyInit, OsRng as AeadOsRng, Payload},
    XChaCha20Poly1305,
};
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Nonce length prepended to every sealed payload.
pub const NONCE_LEN: usize = 24;

/// Seal `plaintext` with a 32-byte key, prepending a random 24-byte nonce.
/// `aad` is authenticated but not encrypted.
pub fn seal(key: &[u8; 32], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = XChaCha20Poly1305::new_from_slice(key).map_err(|_| CryptoError::AeadEncrypt)?;

    let nonce = XChaCha20Poly1305::generate_nonce(&mut AeadOsRng);
    let ciphertext = cipher
        .encrypt(&nonce, Payload { msg: plaintext, aad })
        .map_err(|_| CryptoError::AeadEncrypt)?;

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Open wire-format bytes (nonce || ciphertext+tag).
pub fn open(key: &[u8; 32], data: &[u8], aad: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if data.len() < NONCE_LEN {
        return Err(CryptoError::AeadDecrypt);
    }
    let (nonce_bytes, ct) = data.split_at(NONCE_LEN);
    let nonce = chacha20poly1305::XNonce::from_slice(nonce_bytes);

    let cipher = XChaCha20Poly1305::new_from_slice(key).map_err(|_| CryptoError::AeadDecrypt)?;

    let plaintext = cipher
        .decrypt(nonce, Payload { msg: ct, aad })
        .map_err(|_| CryptoError::AeadDecrypt)?;

    Ok(Zeroizing::new(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AAD: &[u8] = b"test-aad";

    fn key(byte: u8) -> [u8; 32] {
        [byte; 32]
    }

    #[test]
    fn seal_open_round_trip() {
        let sealed = seal(&key(1), b"hello vault", AAD).unwrap();
        let opened = open(&key(1), &sealed, AAD).unwrap();
        assert_eq!(&opened[..], b"hello vault");
    }

    #[test]
    fn wrong_key_fails() {
        let sealed = seal(&key(1), b"hello vault", AAD).unwrap();
        assert!(open(&key(2), &sealed, AAD).is_err());
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let mut sealed = seal(&key(1), b"hello vault", AAD).unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;
        assert!(open(&key(1), &sealed, AAD).is_err());
    }

    #[test]
    fn truncated_input_fails() {
        assert!(open(&key(1), &[0u8; 7], AAD).is_err());
    }

    #[test]
    fn wrong_aad_fails() {
        let sealed = seal(&key(1), b"hello vault", AAD).unwrap();
        assert!(open(&key(1), &sealed, b"other-aad").is_err());
    }
}
