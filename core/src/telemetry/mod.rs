//! telemetry/mod.rs
//! Run counters, stage timers, and the immutable snapshot returned by a run.
//!
//! Notes:
//! - Counters are plain integers owned by the single run loop; no atomics.
//! - The snapshot is serde-serializable so the CLI can print it as JSON.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
