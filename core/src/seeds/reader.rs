// ## 📂 File: `src/seeds/reader.rs`

use std::io::BufRead;

use crate::seeds::SeedError;

/// Line-oriented seed reader.
///
/// Call [`read_header`](Self::read_header) once, then iterate for seeds.
#[derive(Debug)]
pub struct SeedReader<R: BufRead> {
    inner: R,
    header_read: bool,
    seeds_read: u64,
}

impl<R: BufRead> SeedReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, header_read: false, seeds_read: 0 }
    }

    /// Read the first line exactly as stored, terminator included.
    /// Empty when the input is empty.
    pub fn read_header(&mut self) -> Result<Vec<u8>, SeedError> {
        let mut line = Vec::new();
        if !self.header_read {
            self.inner.read_until(b'\n', &mut line)?;
            self.header_read = true;
        }
        Ok(line)
    }

    /// Next seed line, or `None` at EOF.
    pub fn next_seed(&mut self) -> Result<Option<Vec<u8>>, SeedError> {
        if !self.header_read {
            self.read_header()?;
        }

        let mut line = Vec::new();
        let n = self.inner.read_until(b'\n', &mut line)?;
        if n == 0 {
            return Ok(None);
        }
        self.seeds_read += 1;
        Ok(Some(line))
    }

    /// Discard up to `n` seeds; returns how many were actually skipped.
    pub fn skip_seeds(&mut self, n: u64) -> Result<u64, SeedError> {
        let mut skipped = 0;
        while skipped < n {
            if self.next_seed()?.is_none() {
                break;
            }
            skipped += 1;
        }
        Ok(skipped)
    }

    /// Seed lines consumed so far, skipped ones included.
    pub fn seeds_read(&self) -> u64 {
        self.seeds_read
    }
}

impl<R: BufRead> Iterator for SeedReader<R> {
    type Item = Result<Vec<u8>, SeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_seed().transpose()
    }
}

/// Parse the leading integer of a header line, if any. Used only for diagnostics.
pub fn declared_seed_count(header: &[u8]) -> Option<u64> {
    let text = std::str::from_utf8(header).ok()?;
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn header_keeps_its_terminator() {
        let mut r = SeedReader::new(Cursor::new(b"3\r\na\n".to_vec()));
        assert_eq!(r.read_header().unwrap(), b"3\r\n");
    }

    #[test]
    fn last_line_without_newline_is_a_seed() {
        let r = SeedReader::new(Cursor::new(b"2\nx\ny".to_vec()));
        let seeds: Vec<_> = r.map(|s| s.unwrap()).collect();
        assert_eq!(seeds, vec![b"x\n".to_vec(), b"y".to_vec()]);
    }

    #[test]
    fn declared_count_is_lenient() {
        assert_eq!(declared_seed_count(b"10\n"), Some(10));
        assert_eq!(declared_seed_count(b"ten\n"), None);
        assert_eq!(declared_seed_count(b""), None);
    }
}
