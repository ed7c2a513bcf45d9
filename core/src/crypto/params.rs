// ## 📂 File: `src/crypto/params.rs`

//! crypto/params.rs
//! Key and IV shaping for a resolved cipher.
//!
//! Design:
//! - IV: the fixed ASCII block `"0000000000000000"` cut to the cipher's IV length.
//!   Any length past the fixed block is filled with 0x00.
//! - Key: the caller always hands over the full 32-byte seed digest. The cipher
//!   layer shapes it the way OpenSSL's `openssl_encrypt` does:
//!   shorter than the key length → zero-pad; variable-length ciphers take the whole
//!   key while it fits their maximum; everything else truncates.

use crate::constants::FIXED_IV;
use crate::crypto::registry::CipherInfo;

/// Build the IV for a cipher that expects `iv_len` bytes.
///
/// Contract:
/// - Output length is exactly `iv_len` (empty for ECB and RC4).
/// - Deterministic: the same length always yields the same IV.
#[inline]
pub fn derive_iv(iv_len: usize) -> Vec<u8> {
    let mut iv = vec![0u8; iv_len];
    let take = iv_len.min(FIXED_IV.len());
    iv[..take].copy_from_slice(&FIXED_IV[..take]);
    iv
}

/// Shape `key` for `info`.
#[inline]
pub fn fit_key(info: &CipherInfo, key: &[u8]) -> Vec<u8> {
    let key_len = info.key_len();
    if key.len() < key_len {
        let mut padded = key.to_vec();
        padded.resize(key_len, 0);
        padded
    } else if key.len() <= info.max_key_len() {
        key.to_vec()
    } else {
        key[..key_len].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::registry::resolve;

    #[test]
    fn iv_is_truncated_ascii_zeroes() {
        assert_eq!(derive_iv(12), b"000000000000".to_vec());
        assert_eq!(derive_iv(8), b"00000000".to_vec());
        assert!(derive_iv(0).is_empty());
    }

    #[test]
    fn iv_longer_than_fixed_block_is_zero_padded() {
        let iv = derive_iv(24);
        assert_eq!(&iv[..16], b"0000000000000000");
        assert!(iv[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn fixed_key_ciphers_truncate() {
        let key = [7u8; 32];
        assert_eq!(fit_key(resolve("aes-128-ctr").unwrap(), &key).len(), 16);
        assert_eq!(fit_key(resolve("des-ede3-cbc").unwrap(), &key).len(), 24);
        assert_eq!(fit_key(resolve("des-ecb").unwrap(), &key).len(), 8);
        assert_eq!(fit_key(resolve("cast5-cbc").unwrap(), &key).len(), 16);
    }

    #[test]
    fn variable_key_ciphers_keep_full_digest() {
        let key = [7u8; 32];
        assert_eq!(fit_key(resolve("bf-cbc").unwrap(), &key).len(), 32);
        assert_eq!(fit_key(resolve("rc4").unwrap(), &key).len(), 32);
    }

    #[test]
    fn short_key_is_zero_padded() {
        let fitted = fit_key(resolve("aes-256-ctr").unwrap(), &[1u8; 4]);
        assert_eq!(fitted.len(), 32);
        assert_eq!(&fitted[..4], &[1u8; 4]);
        assert!(fitted[4..].iter().all(|&b| b == 0));
    }
}
