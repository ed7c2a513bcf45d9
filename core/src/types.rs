// ## 📂 File: `src/types.rs`

use std::io;
use thiserror::Error;

use crate::{config::ConfigError, crypto::CryptoError, seeds::SeedError};

/// Unified generator error covering configuration, seed input, crypto and output I/O.
/// - `From<T>` impls let `?` cross layer boundaries.
/// - Every variant is fatal for the run: there is no per-seed recovery.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Rejected before any output is produced.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Seed file could not be opened or read.
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),

    /// Cipher lookup or encryption failed.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Writing keystream output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GeneratorError {
    /// Downstream consumer closed the output early.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, GeneratorError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
