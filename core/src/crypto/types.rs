// ## 📂 File: `src/crypto/types.rs`

use std::fmt;
use thiserror::Error;

/// Block size of the 128-bit block ciphers (AES, ARIA, Camellia, SM4).
pub const BLOCK_LEN_16: usize = 16;

/// Block size of the 64-bit block ciphers (DES, 3DES, Blowfish, CAST5).
pub const BLOCK_LEN_8: usize = 8;

/// Standard 12-byte nonce length for AES-GCM and ChaCha20-Poly1305.
pub const NONCE_LEN_12: usize = 12;

/// OpenSSL-style ChaCha20 IV: 4-byte little-endian block counter + 12-byte nonce.
pub const CHACHA20_IV_LEN: usize = 16;

/// Underlying primitive of a registry entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CipherFamily {
    Aes128,
    Aes192,
    Aes256,
    Aria128,
    Aria192,
    Aria256,
    Camellia128,
    Camellia192,
    Camellia256,
    Sm4,
    Blowfish,
    Cast5,
    Des,
    TdesEde2,
    TdesEde3,
    Rc4,
    ChaCha20,
}

impl CipherFamily {
    /// Native block size in bytes; 1 for stream ciphers.
    pub const fn block_size(self) -> usize {
        use CipherFamily::*;
        match self {
            Aes128 | Aes192 | Aes256
            | Aria128 | Aria192 | Aria256
            | Camellia128 | Camellia192 | Camellia256
            | Sm4 => BLOCK_LEN_16,
            Blowfish | Cast5 | Des | TdesEde2 | TdesEde3 => BLOCK_LEN_8,
            Rc4 | ChaCha20 => 1,
        }
    }

    /// Default key length in bytes.
    pub const fn key_len(self) -> usize {
        use CipherFamily::*;
        match self {
            Aes128 | Aria128 | Camellia128 | Sm4 => 16,
            Aes192 | Aria192 | Camellia192 => 24,
            Aes256 | Aria256 | Camellia256 | ChaCha20 => 32,
            Blowfish | Cast5 | Rc4 => 16,
            Des => 8,
            TdesEde2 => 16,
            TdesEde3 => 24,
        }
    }

    /// Largest key the primitive accepts. Equal to `key_len` for fixed-key ciphers.
    pub const fn max_key_len(self) -> usize {
        match self {
            CipherFamily::Blowfish => 56,
            CipherFamily::Rc4 => 256,
            other => other.key_len(),
        }
    }
}

/// Mode of operation of a registry entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CipherMode {
    Ecb,
    Cbc,
    /// Full-block cipher feedback.
    Cfb,
    /// 8-bit cipher feedback.
    Cfb8,
    Ofb,
    /// 128-bit big-endian counter.
    Ctr,
    /// Ciphertext only; the tag is dropped.
    Gcm,
    /// Native stream cipher (RC4, ChaCha20).
    Stream,
    /// ChaCha20-Poly1305; ciphertext only.
    Poly1305,
}

impl CipherMode {
    /// ECB and CBC run without padding, so input must be whole blocks.
    pub const fn requires_full_blocks(self) -> bool {
        matches!(self, CipherMode::Ecb | CipherMode::Cbc)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherMode::Ecb      => "ecb",
            CipherMode::Cbc      => "cbc",
            CipherMode::Cfb      => "cfb",
            CipherMode::Cfb8     => "cfb8",
            CipherMode::Ofb      => "ofb",
            CipherMode::Ctr      => "ctr",
            CipherMode::Gcm      => "gcm",
            CipherMode::Stream   => "stream",
            CipherMode::Poly1305 => "poly1305",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum CryptoError {
    /// Name not present in the cipher registry.
    #[error("unsupported cipher: {name}")]
    UnsupportedCipher { name: String },

    /// Key rejected by the primitive.
    #[error("invalid key length for {cipher}: expected={expected}, actual={actual}")]
    InvalidKeyLen { cipher: &'static str, expected: usize, actual: usize },

    /// IV rejected by the primitive.
    #[error("invalid IV length for {cipher}: expected={expected}, actual={actual}")]
    InvalidIvLen { cipher: &'static str, expected: usize, actual: usize },

    /// ECB/CBC without padding over a partial block.
    #[error("{cipher}: data length {len} is not a multiple of the {block_size}-byte block")]
    NotBlockAligned { cipher: &'static str, len: usize, block_size: usize },

    /// General runtime error with context.
    #[error("crypto failure: {0}")]
    Failure(String),
}
