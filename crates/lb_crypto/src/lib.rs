//! lb_crypto — Lockbox cryptographic primitives
//!
//! # Design principles
//! - NO custom crypto; all primitives come from audited Rust crates.
//! - Zeroize all secret material on drop.
//! - Derived keys are opaque newtypes to prevent accidental misuse.
//!
//! # Module layout
//! - `kdf`   — PBKDF2-HMAC-SHA256 password key derivation + salt generation
//! - `aead`  — XChaCha20-Poly1305 seal/open helpers
//! - `error` — unified error type

pub mod aead;
pub mod error;
pub mod kdf;

pub use error::CryptoError;
pub use kdf::{DerivedKey, KeyDerivation, Pbkdf2Sha256};
