//! Fixed-capacity memory sink for encoder output.
//!
//! The PNG engine emits its output through `std::io::Write`. [`MemorySink`]
//! satisfies that contract on top of a caller-owned byte slice, appending
//! each chunk at a running offset instead of touching the filesystem. A
//! chunk that would run past the end of the slice fails the write with
//! [`std::io::ErrorKind::WriteZero`] and copies nothing.

use std::io::{self, Write};

/// An `io::Write` implementation backed by a fixed, caller-owned buffer.
///
/// The sink appends monotonically: each successful write lands at
/// [`bytes_written`](MemorySink::bytes_written) and advances it. Previously
/// written bytes are never rewritten or discarded, and the sink never
/// allocates or grows.
///
/// # Example
///
/// ```rust
/// use rasterpng_core::sink::MemorySink;
/// use std::io::Write;
///
/// let mut buffer = [0u8; 16];
/// let mut sink = MemorySink::new(&mut buffer);
/// sink.write_all(b"IHDR").unwrap();
/// assert_eq!(sink.bytes_written(), 4);
/// ```
#[derive(Debug)]
pub struct MemorySink<'a> {
    buffer: &'a mut [u8],
    written: usize,
}

impl<'a> MemorySink<'a> {
    /// Create a sink over `buffer`, starting at offset zero.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, written: 0 }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Total capacity of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Capacity left before the sink is full.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.written
    }
}

impl Write for MemorySink<'_> {
    fn write(&mut self, chunk: &[u8]) -> io::Result<usize> {
        if chunk.len() > self.remaining() {
            // All-or-nothing: a partial copy would leave a truncated stream
            // that still reports a plausible length.
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!(
                    "memory sink full: {} byte chunk does not fit ({} of {} bytes used)",
                    chunk.len(),
                    self.written,
                    self.buffer.len()
                ),
            ));
        }

        self.buffer[self.written..self.written + chunk.len()].copy_from_slice(chunk);
        self.written += chunk.len();
        Ok(chunk.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Plain memory region, no OS-level buffering to flush.
        Ok(())
    }
}
