//! constants.rs
//! Fixed filler values and bounds shared by the generator and the CLI.

/// IV source for every cipher: ASCII `'0'` repeated 16 times.
/// Truncated to the cipher's IV length, zero-padded if a cipher needs more.
pub const FIXED_IV: [u8; 16] = *b"0000000000000000";

/// Plaintext filler byte (ASCII `'0'`, not binary zero).
pub const PLAINTEXT_FILL: u8 = b'0';

/// Smallest accepted length exponent: 2^(4-3) = 2 bytes per seed.
pub const MIN_LEN_EXPONENT: u32 = 4;

/// Largest accepted length exponent: 2^(35-3) = 4 GiB per seed.
pub const MAX_LEN_EXPONENT: u32 = 35;

/// The exponent counts bits; this many are dropped to get bytes.
pub const BITS_PER_BYTE_LOG2: u32 = 3;

/// Label printed ahead of the raw seed-count line.
pub const SEED_COUNT_LABEL: &[u8] = b"number of seeds: ";

/// Emit a progress record every N seeds.
pub const PROGRESS_INTERVAL: u64 = 100;

/// Digest length of the seed hash (SHA-256).
pub const SEED_KEY_LEN: usize = 32;
