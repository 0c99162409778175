//! Forward-only byte cursor over any buffered reader.
//!
//! The decoder never seeks backward: it reads one byte at a time and skips
//! raster payloads in bulk. The cursor tracks the absolute offset of the next
//! byte so every decoded setting and diagnostic can carry a [`Span`].
//!
//! [`Span`]: pcl_meta_diagnostics::Span

use std::io::{self, BufRead};

/// A forward-only source of single bytes that tracks its position.
#[derive(Debug)]
pub struct ByteCursor<R> {
    inner: R,
    pos: usize,
}

impl<'a> ByteCursor<&'a [u8]> {
    /// Cursor over an in-memory byte slice.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<R: BufRead> ByteCursor<R> {
    /// Wrap a buffered reader positioned at offset 0.
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Read one byte. `Ok(None)` signals end of stream.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = loop {
            match self.inner.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => break buf[0],
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.inner.consume(1);
        self.pos += 1;
        Ok(Some(byte))
    }

    /// Consume up to `len` bytes without interpreting them.
    ///
    /// Returns the number of bytes actually skipped, which is smaller than
    /// `len` only when the stream ends first.
    pub fn skip(&mut self, len: usize) -> io::Result<usize> {
        let mut skipped = 0usize;
        while skipped < len {
            let available = match self.inner.fill_buf() {
                Ok([]) => break,
                Ok(buf) => buf.len(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let step = available.min(len - skipped);
            self.inner.consume(step);
            skipped += step;
        }
        self.pos += skipped;
        Ok(skipped)
    }
}
