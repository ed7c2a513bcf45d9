// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters updated while seeds are processed.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounters {
    pub seeds_processed: u64,
    pub seeds_skipped: u64,
    pub bytes_keystream: u64,
    pub bytes_header: u64,
}

impl RunCounters {
    /// Record the diagnostic line.
    pub fn add_header(&mut self, header_len: usize) {
        self.bytes_header += header_len as u64;
    }

    /// Record one emitted keystream block.
    pub fn add_seed(&mut self, keystream_len: usize) {
        self.seeds_processed += 1;
        self.bytes_keystream += keystream_len as u64;
    }

    pub fn add_skipped(&mut self, n: u64) {
        self.seeds_skipped += n;
    }

    /// Everything written to the output sink.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_header + self.bytes_keystream
    }
}

impl AddAssign for RunCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.seeds_processed += rhs.seeds_processed;
        self.seeds_skipped   += rhs.seeds_skipped;
        self.bytes_keystream += rhs.bytes_keystream;
        self.bytes_header    += rhs.bytes_header;
    }
}
