//! crypto/mod.rs
//! Seed digest, cipher registry, key/IV shaping and the RustCrypto backends.

pub mod types;
pub mod registry;
pub mod digest;
pub mod params;
pub mod modes;
pub mod aead;
pub mod engine;

pub use types::*;
pub use registry::{resolve, iv_length, supported_ciphers, CipherInfo};
pub use digest::*;
pub use params::*;
pub use engine::KeystreamCipher;
