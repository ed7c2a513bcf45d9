// ## 📂 File: `src/crypto/engine.rs`

//! crypto/engine.rs
//! Registry entry → concrete RustCrypto type dispatch.
//!
//! `KeystreamCipher` is resolved once per run; `encrypt` is then called per seed
//! with that seed's key. Key and IV shaping happen here so callers only ever pass
//! the raw 32-byte digest.

use cipher::consts::U32;

use crate::crypto::aead::{seal_detached, Aes192Gcm};
use crate::crypto::modes;
use crate::crypto::params::{derive_iv, fit_key};
use crate::crypto::registry::{resolve, CipherInfo};
use crate::crypto::types::{CipherFamily, CipherMode, CryptoError};

// Modes shared by every block cipher.
macro_rules! block_modes {
    ($c:ty, $info:expr, $key:expr, $iv:expr, $buf:expr) => {
        match $info.mode {
            CipherMode::Ecb  => modes::ecb::<$c>($info, $key, $buf),
            CipherMode::Cbc  => modes::cbc::<$c>($info, $key, $iv, $buf),
            CipherMode::Cfb  => modes::feedback::<cfb_mode::Encryptor<$c>>($info, $key, $iv, $buf),
            CipherMode::Cfb8 => modes::feedback::<cfb8::Encryptor<$c>>($info, $key, $iv, $buf),
            CipherMode::Ofb  => modes::stream_core::<ofb::OfbCore<$c>>($info, $key, $iv, $buf),
            other => Err(unsupported_mode($info, other)),
        }
    };
}

// 128-bit block ciphers additionally run in CTR.
macro_rules! wide_block_modes {
    ($c:ty, $info:expr, $key:expr, $iv:expr, $buf:expr) => {
        match $info.mode {
            CipherMode::Ctr => modes::stream_core::<ctr::CtrCore<$c, ctr::flavors::Ctr128BE>>($info, $key, $iv, $buf),
            _ => block_modes!($c, $info, $key, $iv, $buf),
        }
    };
}

fn unsupported_mode(info: &CipherInfo, mode: CipherMode) -> CryptoError {
    CryptoError::Failure(format!("{}: mode {} not available for this primitive", info.name, mode))
}

/// Encrypt `buf` in place with the cipher described by `info`.
///
/// `key` and `iv` must already be shaped for `info` (see `params`).
pub fn encrypt_in_place(info: &CipherInfo, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), CryptoError> {
    use CipherFamily::*;

    match (info.family, info.mode) {
        (Aes128, CipherMode::Gcm) => seal_detached::<aes_gcm::Aes128Gcm>(info, key, iv, buf),
        (Aes192, CipherMode::Gcm) => seal_detached::<Aes192Gcm>(info, key, iv, buf),
        (Aes256, CipherMode::Gcm) => seal_detached::<aes_gcm::Aes256Gcm>(info, key, iv, buf),
        (ChaCha20, CipherMode::Poly1305) => {
            seal_detached::<chacha20poly1305::ChaCha20Poly1305>(info, key, iv, buf)
        }
        (ChaCha20, CipherMode::Stream) => modes::chacha20(info, key, iv, buf),
        (Rc4, CipherMode::Stream) => modes::keyed_stream::<rc4::Rc4<U32>>(info, key, buf),

        (Aes128, _) => wide_block_modes!(aes::Aes128, info, key, iv, buf),
        (Aes192, _) => wide_block_modes!(aes::Aes192, info, key, iv, buf),
        (Aes256, _) => wide_block_modes!(aes::Aes256, info, key, iv, buf),
        (Aria128, _) => wide_block_modes!(aria::Aria128, info, key, iv, buf),
        (Aria192, _) => wide_block_modes!(aria::Aria192, info, key, iv, buf),
        (Aria256, _) => wide_block_modes!(aria::Aria256, info, key, iv, buf),
        (Camellia128, _) => wide_block_modes!(camellia::Camellia128, info, key, iv, buf),
        (Camellia192, _) => wide_block_modes!(camellia::Camellia192, info, key, iv, buf),
        (Camellia256, _) => wide_block_modes!(camellia::Camellia256, info, key, iv, buf),
        (Sm4, _) => wide_block_modes!(sm4::Sm4, info, key, iv, buf),

        (Blowfish, _) => block_modes!(blowfish::Blowfish, info, key, iv, buf),
        (Cast5, _) => block_modes!(cast5::Cast5, info, key, iv, buf),
        (Des, _) => block_modes!(des::Des, info, key, iv, buf),
        (TdesEde2, _) => block_modes!(des::TdesEde2, info, key, iv, buf),
        (TdesEde3, _) => block_modes!(des::TdesEde3, info, key, iv, buf),

        (family, mode) => Err(CryptoError::Failure(format!(
            "{}: no implementation for {:?}/{}",
            info.name, family, mode
        ))),
    }
}

/// A resolved cipher with its IV fixed for the whole run.
#[derive(Clone, Debug)]
pub struct KeystreamCipher {
    info: &'static CipherInfo,
    iv: Vec<u8>,
}

impl KeystreamCipher {
    /// Resolve `name` against the registry and derive its IV.
    pub fn new(name: &str) -> Result<Self, CryptoError> {
        let info = resolve(name)?;
        Ok(Self::from_info(info))
    }

    pub fn from_info(info: &'static CipherInfo) -> Self {
        Self { info, iv: derive_iv(info.iv_len()) }
    }

    /// Encrypt `plaintext` under `key` (any length; shaped to the cipher) and
    /// return the ciphertext, which has the same length as the plaintext.
    pub fn encrypt(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut buf = plaintext.to_vec();
        self.encrypt_buf(key, &mut buf)?;
        Ok(buf)
    }

    /// In-place variant of [`encrypt`](Self::encrypt).
    pub fn encrypt_buf(&self, key: &[u8], buf: &mut [u8]) -> Result<(), CryptoError> {
        let key = fit_key(self.info, key);
        encrypt_in_place(self.info, &key, &self.iv, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::registry::CIPHERS;

    #[test]
    fn every_registered_cipher_encrypts_a_block_aligned_buffer() {
        let key = [0x42u8; 32];
        for info in CIPHERS {
            let cipher = KeystreamCipher::from_info(info);
            let out = cipher.encrypt(&key, &[b'0'; 64]).unwrap_or_else(|e| panic!("{}: {e}", info.name));
            assert_eq!(out.len(), 64, "{}", info.name);
            assert_ne!(out, vec![b'0'; 64], "{} returned plaintext", info.name);
        }
    }

    #[test]
    fn unaligned_ecb_and_cbc_are_rejected() {
        let key = [1u8; 32];
        for name in ["aes-128-ecb", "aes-256-cbc", "des-ede3-cbc", "bf-ecb"] {
            let cipher = KeystreamCipher::new(name).unwrap();
            let err = cipher.encrypt(&key, &[b'0'; 12]).unwrap_err();
            assert!(matches!(err, CryptoError::NotBlockAligned { .. }), "{name}: {err}");
        }
    }

    #[test]
    fn stream_modes_accept_any_length() {
        let key = [1u8; 32];
        for name in ["aes-128-ctr", "aes-128-cfb", "aes-128-cfb8", "aes-128-ofb", "bf-ofb", "rc4", "chacha20", "aes-256-gcm"] {
            let cipher = KeystreamCipher::new(name).unwrap();
            assert_eq!(cipher.encrypt(&key, &[b'0'; 13]).unwrap().len(), 13, "{name}");
        }
    }

    #[test]
    fn ctr_output_is_a_prefix_of_longer_output() {
        let key = [9u8; 32];
        let cipher = KeystreamCipher::new("aes-256-ctr").unwrap();
        let short = cipher.encrypt(&key, &[b'0'; 8]).unwrap();
        let long = cipher.encrypt(&key, &[b'0'; 32]).unwrap();
        assert_eq!(&long[..8], &short[..]);
    }
}
