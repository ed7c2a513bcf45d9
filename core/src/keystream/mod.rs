//! keystream/mod.rs
//! Per-seed keystream generation and the sequential run loop that writes it out.

pub mod generator;
pub mod pipeline;

pub use generator::KeystreamGenerator;
pub use pipeline::{run, write_diagnostic_line};
