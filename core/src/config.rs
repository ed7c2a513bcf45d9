// ## 📂 File: `src/config.rs`

//! config.rs
//! Run configuration and its bounds checks.
//!
//! Notes:
//! - The cipher name is not checked here. An unknown name surfaces as
//!   `CryptoError::UnsupportedCipher` on the first encryption, after the
//!   diagnostic line has already been written.

use thiserror::Error;

use crate::constants::{BITS_PER_BYTE_LOG2, MAX_LEN_EXPONENT, MIN_LEN_EXPONENT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("length too short: exponent {exponent} is below the minimum of {min}")]
    LengthTooShort { exponent: i64, min: u32 },

    #[error("length too long: exponent {exponent} is above the maximum of {max}")]
    LengthTooLong { exponent: i64, max: u32 },
}

/// What to do with a seed line's terminator before hashing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// Hash the line exactly as read, `\n` included.
    #[default]
    Keep,
    /// Drop a trailing `\n` or `\r\n`.
    Strip,
}

impl LineEnding {
    pub fn apply<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        match self {
            LineEnding::Keep => line,
            LineEnding::Strip => {
                let line = line.strip_suffix(b"\n").unwrap_or(line);
                line.strip_suffix(b"\r").unwrap_or(line)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Registry cipher name, resolved lazily.
    pub cipher: String,
    /// Output bits per seed as a power of two.
    pub len_exponent: i64,
    /// Seeds discarded after the header line.
    pub skip: u64,
    pub line_ending: LineEnding,
}

impl GeneratorConfig {
    pub fn new(cipher: impl Into<String>, len_exponent: i64) -> Self {
        Self {
            cipher: cipher.into(),
            len_exponent,
            skip: 0,
            line_ending: LineEnding::Keep,
        }
    }

    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Check the exponent bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.len_exponent < i64::from(MIN_LEN_EXPONENT) {
            return Err(ConfigError::LengthTooShort { exponent: self.len_exponent, min: MIN_LEN_EXPONENT });
        }
        if self.len_exponent > i64::from(MAX_LEN_EXPONENT) {
            return Err(ConfigError::LengthTooLong { exponent: self.len_exponent, max: MAX_LEN_EXPONENT });
        }
        Ok(())
    }

    /// Keystream bytes per seed: `2^(len_exponent - 3)`.
    pub fn byte_len(&self) -> Result<usize, ConfigError> {
        self.validate()?;
        let shift = self.len_exponent as u32 - BITS_PER_BYTE_LOG2;
        1usize
            .checked_shl(shift)
            .ok_or(ConfigError::LengthTooLong { exponent: self.len_exponent, max: MAX_LEN_EXPONENT })
    }
}
