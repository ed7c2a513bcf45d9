// ## 📂 File: `src/crypto/aead.rs`

//! crypto/aead.rs
//! AEAD ciphers used as keystream sources.
//!
//! Only the ciphertext is emitted; the authentication tag is computed and dropped.
//! Associated data is always empty.

use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::{AeadCore, AeadInPlace, KeyInit, Nonce};

use crate::crypto::registry::CipherInfo;
use crate::crypto::types::CryptoError;

/// AES-192 in GCM mode with the standard 96-bit nonce.
pub type Aes192Gcm = aes_gcm::AesGcm<aes_gcm::aes::Aes192, aes_gcm::aead::consts::U12>;

/// Encrypt `buf` in place under `A`, discarding the tag.
pub fn seal_detached<A>(info: &CipherInfo, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError>
where
    A: AeadInPlace + KeyInit,
{
    let cipher = A::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
        cipher: info.name,
        expected: info.key_len(),
        actual: key.len(),
    })?;

    let nonce_len = <<A as AeadCore>::NonceSize as Unsigned>::USIZE;
    if iv.len() != nonce_len {
        return Err(CryptoError::InvalidIvLen {
            cipher: info.name,
            expected: nonce_len,
            actual: iv.len(),
        });
    }

    let _tag = cipher
        .encrypt_in_place_detached(Nonce::<A>::from_slice(iv), b"", buf)
        .map_err(|_| CryptoError::Failure(format!("{}: encryption failed", info.name)))?;
    Ok(())
}
