// ## 📂 File: `src/seeds/mod.rs`

//! seeds/mod.rs
//! Seed file input.
//!
//! Layout of a seed file:
//! - line 1: free-form seed count annotation, echoed verbatim, never trusted
//! - every following line: one seed
//!
//! Lines are split on `\n` only and returned with the terminator attached.

pub mod reader;

pub use reader::*;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot open seed file {}: {source}", .path.display())]
    Open { path: PathBuf, #[source] source: io::Error },

    #[error("failed reading seed input: {0}")]
    Read(#[from] io::Error),
}

/// Where seeds come from.
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

impl InputSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        InputSource::File(path.as_ref().to_path_buf())
    }

    /// Short human label for logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Reader(_) => "<reader>".to_string(),
            InputSource::File(p) => p.display().to_string(),
            InputSource::Memory(b) => format!("<memory: {} bytes>", b.len()),
        }
    }
}

/// Normalize an input source into a buffered reader.
pub fn open_input(src: InputSource) -> Result<Box<dyn BufRead + Send>, SeedError> {
    let reader: Box<dyn BufRead + Send> = match src {
        InputSource::Reader(r) => Box::new(BufReader::new(r)),
        InputSource::File(path) => {
            let file = File::open(&path).map_err(|source| SeedError::Open { path, source })?;
            Box::new(BufReader::new(file))
        }
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}
