// ## 📂 File: `src/keystream/generator.rs`

//! keystream/generator.rs
//! One seed in, `2^(e-3)` bytes of keystream out.
//!
//! Design:
//! - Key = SHA-256 of the seed bytes (after the configured line-ending rule).
//! - Plaintext = `PLAINTEXT_FILL` repeated; IV = the fixed ASCII block.
//! - The cipher is looked up once when the generator is built but an unknown name
//!   only fails when the first seed is encrypted.

use crate::config::GeneratorConfig;
use crate::constants::{PLAINTEXT_FILL, SEED_KEY_LEN};
use crate::crypto::{derive_seed_key, CryptoError, KeystreamCipher};
use crate::types::GeneratorError;

#[derive(Clone, Debug)]
pub struct KeystreamGenerator {
    config: GeneratorConfig,
    byte_len: usize,
    cipher: Option<KeystreamCipher>,
}

impl KeystreamGenerator {
    /// Validate `config` and prepare the cipher.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let byte_len = config.byte_len()?;
        let cipher = match KeystreamCipher::new(&config.cipher) {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::debug!(cipher = %config.cipher, error = %e, "cipher not resolved");
                None
            }
        };
        Ok(Self { config, byte_len, cipher })
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn cipher(&self) -> Result<&KeystreamCipher, CryptoError> {
        self.cipher
            .as_ref()
            .ok_or_else(|| CryptoError::UnsupportedCipher { name: self.config.cipher.clone() })
    }

    /// Key for one raw seed line.
    pub fn key_for(&self, seed: &[u8]) -> Result<[u8; SEED_KEY_LEN], GeneratorError> {
        let seed = self.config.line_ending.apply(seed);
        Ok(derive_seed_key(seed)?)
    }

    /// Fill `buf` with the keystream for `key`, reusing its allocation.
    pub fn keystream_into(&self, key: &[u8], buf: &mut Vec<u8>) -> Result<(), GeneratorError> {
        let cipher = self.cipher()?;
        buf.clear();
        buf.resize(self.byte_len, PLAINTEXT_FILL);
        cipher.encrypt_buf(key, buf)?;
        Ok(())
    }

    /// Keystream for one seed.
    pub fn generate(&self, seed: &[u8]) -> Result<Vec<u8>, GeneratorError> {
        let key = self.key_for(seed)?;
        let mut buf = Vec::with_capacity(self.byte_len);
        self.keystream_into(&key, &mut buf)?;
        Ok(buf)
    }
}
