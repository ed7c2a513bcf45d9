// ## 📂 File: `src/keystream/pipeline.rs`

//! keystream/pipeline.rs
//! Sequential run loop: header line, then one keystream block per seed.
//!
//! Output layout:
//! ```text
//! "number of seeds: " <raw first line, terminator included> "\n"
//! <block seed 1><block seed 2>...
//! ```
//! Blocks are written back to back with no separators. A consumer closing the
//! output early (broken pipe) ends the run without error.

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::constants::{PROGRESS_INTERVAL, SEED_COUNT_LABEL};
use crate::keystream::generator::KeystreamGenerator;
use crate::seeds::{declared_seed_count, open_input, InputSource, SeedReader};
use crate::telemetry::{RunCounters, RunSnapshot, Stage, TelemetryTimer};
use crate::types::GeneratorError;

/// Write the diagnostic line for `header`; returns the number of bytes written.
pub fn write_diagnostic_line<W: Write>(out: &mut W, header: &[u8]) -> io::Result<usize> {
    let mut line = Vec::with_capacity(SEED_COUNT_LABEL.len() + header.len() + 1);
    line.extend_from_slice(SEED_COUNT_LABEL);
    line.extend_from_slice(header);
    line.push(b'\n');
    out.write_all(&line)?;
    Ok(line.len())
}

/// Swallow a broken pipe, report whether one happened.
fn tolerate_broken_pipe(res: io::Result<()>) -> Result<bool, GeneratorError> {
    match res {
        Ok(()) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed by consumer");
            Ok(true)
        }
        Err(e) => Err(e.into()),
    }
}

/// Generate keystreams for every seed in `input` and write them to `out`.
///
/// Configuration is validated before anything is read or written. Every error
/// after that point aborts the run; output already written stays written.
pub fn run<W: Write>(
    input: InputSource,
    out: &mut W,
    config: &GeneratorConfig,
) -> Result<RunSnapshot, GeneratorError> {
    let generator = KeystreamGenerator::new(config.clone())?;
    let source = input.describe();
    let mut seeds = SeedReader::new(open_input(input)?);

    info!(
        cipher = %config.cipher,
        bytes_per_seed = generator.byte_len(),
        source = %source,
        "starting keystream run"
    );

    let mut counters = RunCounters::default();
    let mut timer = TelemetryTimer::new();

    let header = timer.time(Stage::Read, || seeds.read_header())?;
    let declared = declared_seed_count(&header);

    let mut truncated = false;
    match timer.time(Stage::Write, || write_diagnostic_line(out, &header)) {
        Ok(n) => counters.add_header(n),
        Err(e) => truncated = tolerate_broken_pipe(Err(e))?,
    }

    if !truncated && config.skip > 0 {
        let skipped = timer.time(Stage::Read, || seeds.skip_seeds(config.skip))?;
        counters.add_skipped(skipped);
        debug!(requested = config.skip, skipped, "skipped leading seeds");
    }

    let mut block = Vec::with_capacity(generator.byte_len());
    while !truncated {
        let seed = match timer.time(Stage::Read, || seeds.next_seed())? {
            Some(seed) => seed,
            None => break,
        };

        let key = timer.time(Stage::Derive, || generator.key_for(&seed))?;
        timer.time(Stage::Encrypt, || generator.keystream_into(&key, &mut block))?;

        truncated = tolerate_broken_pipe(timer.time(Stage::Write, || out.write_all(&block)))?;
        if truncated {
            break;
        }
        counters.add_seed(block.len());

        if counters.seeds_processed % PROGRESS_INTERVAL == 0 {
            info!(
                processed = counters.seeds_processed,
                declared = ?declared,
                "generator progress"
            );
        }
    }

    if !truncated {
        truncated = tolerate_broken_pipe(timer.time(Stage::Write, || out.flush()))?;
    }

    if let Some(declared) = declared {
        if !truncated && declared != seeds.seeds_read() {
            warn!(declared, found = seeds.seeds_read(), "seed count line does not match the seeds read");
        }
    }

    timer.finish();
    let snapshot = RunSnapshot::from(&config.cipher, declared, generator.byte_len(), &counters, &timer, truncated);
    info!(
        seeds = snapshot.seeds_processed,
        bytes = snapshot.bytes_written,
        elapsed_ms = snapshot.elapsed.as_millis() as u64,
        truncated,
        "keystream run finished"
    );
    Ok(snapshot)
}
