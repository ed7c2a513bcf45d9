// ## src/crypto/registry.rs

//! crypto/registry.rs
//! Cipher registry: name → primitive, mode, key and IV geometry.
//!
//! Notes:
//! - Names follow the OpenSSL spelling (`aes-256-ctr`, `des-ede3-cbc`, `bf-ofb`).
//! - Lookup is case-insensitive and accepts the common short aliases.
//! - This table is the only place that knows which names exist; callers query it
//!   for validity and IV length instead of keeping their own lists.

use crate::crypto::types::{CipherFamily, CipherMode, CryptoError};
use crate::crypto::types::{CHACHA20_IV_LEN, NONCE_LEN_12};

use CipherFamily::*;
use CipherMode::*;

/// One registry entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CipherInfo {
    pub name: &'static str,
    pub family: CipherFamily,
    pub mode: CipherMode,
}

impl CipherInfo {
    const fn new(name: &'static str, family: CipherFamily, mode: CipherMode) -> Self {
        Self { name, family, mode }
    }

    pub const fn key_len(&self) -> usize {
        self.family.key_len()
    }

    pub const fn max_key_len(&self) -> usize {
        self.family.max_key_len()
    }

    pub const fn block_size(&self) -> usize {
        self.family.block_size()
    }

    /// IV length the cipher expects (0 when it takes none).
    pub const fn iv_len(&self) -> usize {
        match self.mode {
            Ecb => 0,
            Cbc | Cfb | Cfb8 | Ofb | Ctr => self.family.block_size(),
            Gcm | Poly1305 => NONCE_LEN_12,
            Stream => match self.family {
                ChaCha20 => CHACHA20_IV_LEN,
                _ => 0,
            },
        }
    }
}

/// Supported ciphers, sorted by name.
pub static CIPHERS: &[CipherInfo] = &[
    CipherInfo::new("aes-128-cbc", Aes128, Cbc),
    CipherInfo::new("aes-128-cfb", Aes128, Cfb),
    CipherInfo::new("aes-128-cfb8", Aes128, Cfb8),
    CipherInfo::new("aes-128-ctr", Aes128, Ctr),
    CipherInfo::new("aes-128-ecb", Aes128, Ecb),
    CipherInfo::new("aes-128-gcm", Aes128, Gcm),
    CipherInfo::new("aes-128-ofb", Aes128, Ofb),
    CipherInfo::new("aes-192-cbc", Aes192, Cbc),
    CipherInfo::new("aes-192-cfb", Aes192, Cfb),
    CipherInfo::new("aes-192-cfb8", Aes192, Cfb8),
    CipherInfo::new("aes-192-ctr", Aes192, Ctr),
    CipherInfo::new("aes-192-ecb", Aes192, Ecb),
    CipherInfo::new("aes-192-gcm", Aes192, Gcm),
    CipherInfo::new("aes-192-ofb", Aes192, Ofb),
    CipherInfo::new("aes-256-cbc", Aes256, Cbc),
    CipherInfo::new("aes-256-cfb", Aes256, Cfb),
    CipherInfo::new("aes-256-cfb8", Aes256, Cfb8),
    CipherInfo::new("aes-256-ctr", Aes256, Ctr),
    CipherInfo::new("aes-256-ecb", Aes256, Ecb),
    CipherInfo::new("aes-256-gcm", Aes256, Gcm),
    CipherInfo::new("aes-256-ofb", Aes256, Ofb),
    CipherInfo::new("aria-128-cbc", Aria128, Cbc),
    CipherInfo::new("aria-128-cfb", Aria128, Cfb),
    CipherInfo::new("aria-128-cfb8", Aria128, Cfb8),
    CipherInfo::new("aria-128-ctr", Aria128, Ctr),
    CipherInfo::new("aria-128-ecb", Aria128, Ecb),
    CipherInfo::new("aria-128-ofb", Aria128, Ofb),
    CipherInfo::new("aria-192-cbc", Aria192, Cbc),
    CipherInfo::new("aria-192-cfb", Aria192, Cfb),
    CipherInfo::new("aria-192-cfb8", Aria192, Cfb8),
    CipherInfo::new("aria-192-ctr", Aria192, Ctr),
    CipherInfo::new("aria-192-ecb", Aria192, Ecb),
    CipherInfo::new("aria-192-ofb", Aria192, Ofb),
    CipherInfo::new("aria-256-cbc", Aria256, Cbc),
    CipherInfo::new("aria-256-cfb", Aria256, Cfb),
    CipherInfo::new("aria-256-cfb8", Aria256, Cfb8),
    CipherInfo::new("aria-256-ctr", Aria256, Ctr),
    CipherInfo::new("aria-256-ecb", Aria256, Ecb),
    CipherInfo::new("aria-256-ofb", Aria256, Ofb),
    CipherInfo::new("bf-cbc", Blowfish, Cbc),
    CipherInfo::new("bf-cfb", Blowfish, Cfb),
    CipherInfo::new("bf-ecb", Blowfish, Ecb),
    CipherInfo::new("bf-ofb", Blowfish, Ofb),
    CipherInfo::new("camellia-128-cbc", Camellia128, Cbc),
    CipherInfo::new("camellia-128-cfb", Camellia128, Cfb),
    CipherInfo::new("camellia-128-cfb8", Camellia128, Cfb8),
    CipherInfo::new("camellia-128-ctr", Camellia128, Ctr),
    CipherInfo::new("camellia-128-ecb", Camellia128, Ecb),
    CipherInfo::new("camellia-128-ofb", Camellia128, Ofb),
    CipherInfo::new("camellia-192-cbc", Camellia192, Cbc),
    CipherInfo::new("camellia-192-cfb", Camellia192, Cfb),
    CipherInfo::new("camellia-192-cfb8", Camellia192, Cfb8),
    CipherInfo::new("camellia-192-ctr", Camellia192, Ctr),
    CipherInfo::new("camellia-192-ecb", Camellia192, Ecb),
    CipherInfo::new("camellia-192-ofb", Camellia192, Ofb),
    CipherInfo::new("camellia-256-cbc", Camellia256, Cbc),
    CipherInfo::new("camellia-256-cfb", Camellia256, Cfb),
    CipherInfo::new("camellia-256-cfb8", Camellia256, Cfb8),
    CipherInfo::new("camellia-256-ctr", Camellia256, Ctr),
    CipherInfo::new("camellia-256-ecb", Camellia256, Ecb),
    CipherInfo::new("camellia-256-ofb", Camellia256, Ofb),
    CipherInfo::new("cast5-cbc", Cast5, Cbc),
    CipherInfo::new("cast5-cfb", Cast5, Cfb),
    CipherInfo::new("cast5-ecb", Cast5, Ecb),
    CipherInfo::new("cast5-ofb", Cast5, Ofb),
    CipherInfo::new("chacha20", ChaCha20, Stream),
    CipherInfo::new("chacha20-poly1305", ChaCha20, Poly1305),
    CipherInfo::new("des-cbc", Des, Cbc),
    CipherInfo::new("des-cfb", Des, Cfb),
    CipherInfo::new("des-cfb8", Des, Cfb8),
    CipherInfo::new("des-ecb", Des, Ecb),
    CipherInfo::new("des-ede", TdesEde2, Ecb),
    CipherInfo::new("des-ede-cbc", TdesEde2, Cbc),
    CipherInfo::new("des-ede-cfb", TdesEde2, Cfb),
    CipherInfo::new("des-ede-ofb", TdesEde2, Ofb),
    CipherInfo::new("des-ede3", TdesEde3, Ecb),
    CipherInfo::new("des-ede3-cbc", TdesEde3, Cbc),
    CipherInfo::new("des-ede3-cfb", TdesEde3, Cfb),
    CipherInfo::new("des-ede3-cfb8", TdesEde3, Cfb8),
    CipherInfo::new("des-ede3-ofb", TdesEde3, Ofb),
    CipherInfo::new("des-ofb", Des, Ofb),
    CipherInfo::new("rc4", Rc4, Stream),
    CipherInfo::new("sm4-cbc", Sm4, Cbc),
    CipherInfo::new("sm4-cfb", Sm4, Cfb),
    CipherInfo::new("sm4-ctr", Sm4, Ctr),
    CipherInfo::new("sm4-ecb", Sm4, Ecb),
    CipherInfo::new("sm4-ofb", Sm4, Ofb),
];

/// Short names accepted in place of the canonical spelling.
pub static ALIASES: &[(&str, &str)] = &[
    ("aes128", "aes-128-cbc"),
    ("aes192", "aes-192-cbc"),
    ("aes256", "aes-256-cbc"),
    ("bf", "bf-cbc"),
    ("blowfish", "bf-cbc"),
    ("camellia128", "camellia-128-cbc"),
    ("camellia192", "camellia-192-cbc"),
    ("camellia256", "camellia-256-cbc"),
    ("cast", "cast5-cbc"),
    ("cast-cbc", "cast5-cbc"),
    ("des", "des-cbc"),
    ("des3", "des-ede3-cbc"),
    ("sm4", "sm4-cbc"),
];

/// Resolve a cipher name (case-insensitive, aliases allowed).
pub fn resolve(name: &str) -> Result<&'static CipherInfo, CryptoError> {
    let wanted = name.trim().to_ascii_lowercase();
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == wanted)
        .map(|(_, target)| *target)
        .unwrap_or(wanted.as_str());

    CIPHERS
        .binary_search_by(|info| info.name.cmp(canonical))
        .map(|idx| &CIPHERS[idx])
        .map_err(|_| CryptoError::UnsupportedCipher { name: name.to_string() })
}

/// IV length of a named cipher.
pub fn iv_length(name: &str) -> Result<usize, CryptoError> {
    resolve(name).map(CipherInfo::iv_len)
}

/// Canonical names of every supported cipher, sorted.
pub fn supported_ciphers() -> impl Iterator<Item = &'static str> {
    CIPHERS.iter().map(|info| info.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in CIPHERS.windows(2) {
            assert!(pair[0].name < pair[1].name, "{} !< {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn aliases_point_at_real_entries() {
        for (alias, target) in ALIASES {
            assert!(resolve(target).is_ok(), "alias {alias} → {target} is dangling");
        }
    }

    #[test]
    fn ctr_only_on_128_bit_blocks() {
        for info in CIPHERS.iter().filter(|i| i.mode == Ctr || i.mode == Gcm) {
            assert_eq!(info.block_size(), 16, "{}", info.name);
        }
    }
}
