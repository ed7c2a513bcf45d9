// ## src/telemetry/snapshot.rs

//! telemetry/snapshot.rs
//! Immutable summary of a finished run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::RunCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub cipher: String,
    /// Count announced by the header line, when it parses as an integer.
    pub declared_seeds: Option<u64>,
    pub seeds_processed: u64,
    pub seeds_skipped: u64,
    pub bytes_per_seed: u64,
    pub bytes_keystream: u64,
    pub bytes_written: u64,
    /// Consumer closed the output before all seeds were written.
    pub truncated: bool,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl RunSnapshot {
    pub fn from(
        cipher: &str,
        declared_seeds: Option<u64>,
        bytes_per_seed: usize,
        counters: &RunCounters,
        timer: &TelemetryTimer,
        truncated: bool,
    ) -> Self {
        let elapsed = timer.elapsed();
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_keystream as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            cipher: cipher.to_string(),
            declared_seeds,
            seeds_processed: counters.seeds_processed,
            seeds_skipped: counters.seeds_skipped,
            bytes_per_seed: bytes_per_seed as u64,
            bytes_keystream: counters.bytes_keystream,
            bytes_written: counters.bytes_written(),
            truncated,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Internal consistency:
    /// - every processed seed contributed exactly `bytes_per_seed` bytes
    /// - stage times never exceed the wall clock
    pub fn sanity_check(&self) -> bool {
        self.bytes_keystream == self.seeds_processed * self.bytes_per_seed
            && self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
