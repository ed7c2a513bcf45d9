//! crypto/digest.rs
//! Seed → key derivation.
//!
//! The key is the SHA-256 digest of the raw seed bytes. It is produced the long way
//! (lowercase hex, then decoded back to binary) so the hex form can be logged and
//! compared against reference tooling that prints `sha256(seed)`.

use sha2::{
    Digest as _,
    Sha256,
};

use crate::constants::SEED_KEY_LEN;
use crate::crypto::types::CryptoError;

/// Lowercase hex SHA-256 of `seed`.
#[inline]
pub fn seed_digest_hex(seed: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hex::encode(hasher.finalize())
}

/// Derive the 32-byte cipher key for one seed.
pub fn derive_seed_key(seed: &[u8]) -> Result<[u8; SEED_KEY_LEN], CryptoError> {
    let digest_hex = seed_digest_hex(seed);

    let mut key = [0u8; SEED_KEY_LEN];
    hex::decode_to_slice(&digest_hex, &mut key)
        .map_err(|e| CryptoError::Failure(format!("seed digest decode failed: {}", e)))?;

    tracing::trace!(digest = %digest_hex, seed_len = seed.len(), "derived seed key");
    Ok(key)
}
