//! seedstream-core
//!
//! Seed-driven cipher keystream generator.
//! No CLI, no logging subscriber: the binary crate owns those.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;
pub mod types;

pub mod crypto;
pub mod seeds;
pub mod keystream;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::{ConfigError, GeneratorConfig, LineEnding};
    pub use crate::crypto::{resolve, supported_ciphers, CryptoError, KeystreamCipher};
    pub use crate::keystream::{run, KeystreamGenerator};
    pub use crate::seeds::{InputSource, SeedError, SeedReader};
    pub use crate::telemetry::RunSnapshot;
    pub use crate::types::GeneratorError;
}
