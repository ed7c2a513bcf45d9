//! seedstream: seed file in, concatenated cipher keystreams out.
//!
//! stdout carries only the generated bytes; logs, errors and `--stats` go to stderr.

mod args;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seedstream_core::crypto::supported_ciphers;
use seedstream_core::keystream;
use seedstream_core::seeds::InputSource;

use crate::args::Cli;

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn list_ciphers() -> Result<()> {
    let mut out = io::stdout().lock();
    for name in supported_ciphers() {
        match writeln!(out, "{name}") {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            ret => ret?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    if cli.list_ciphers {
        return list_ciphers();
    }

    let (Some(config), Some(seed_file)) = (cli.generator_config(), cli.seed_file.as_ref()) else {
        anyhow::bail!("cipher, seed file and length exponent are required");
    };
    config.validate()?;

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    let snapshot = keystream::run(InputSource::file(seed_file), &mut out, &config)
        .with_context(|| format!("keystream generation with {} failed", config.cipher))?;

    if cli.stats {
        eprintln!("{}", snapshot.to_json()?);
    }
    Ok(())
}
