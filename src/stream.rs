//! The core in-memory sequence stream.

use crate::iter::ChunkedValues;

/// An owned, fixed-length integer sequence with a read cursor.
///
/// A `SequenceStream` is constructed with a length `n` and holds the values
/// `0, 1, ..., n-1`. The buffer contents and length never change after
/// construction; only the read cursor moves. Reads copy a bounded number of
/// elements into caller-provided storage and advance the cursor, so the
/// stream can be drained in chunks of any size:
///
/// ```rust
/// use seqstream::SequenceStream;
///
/// let mut stream = SequenceStream::new(5);
/// let mut chunk = [0i32; 3];
///
/// assert_eq!(stream.read(&mut chunk), 3);
/// assert_eq!(chunk, [0, 1, 2]);
///
/// // Short read near the end of the stream.
/// assert_eq!(stream.read(&mut chunk), 2);
/// assert_eq!(&chunk[..2], &[3, 4]);
///
/// // Exhausted: further reads return 0 until reset.
/// assert_eq!(stream.read(&mut chunk), 0);
/// stream.reset();
/// assert_eq!(stream.position(), 0);
/// ```
///
/// A stream has exactly one owner; it carries no internal locking. Callers
/// that share one across threads must impose external synchronization.
#[derive(Debug, Clone)]
pub struct SequenceStream {
    buffer: Vec<i32>,
    position: usize,
}

impl SequenceStream {
    /// Creates a stream of `len` integers `0..len`, with the cursor at 0.
    ///
    /// A `len` of 0 is valid and yields an immediately exhausted stream.
    pub fn new(len: usize) -> Self {
        Self {
            buffer: (0..len).map(|i| i as i32).collect(),
            position: 0,
        }
    }

    /// Returns the total number of elements, constant for the stream's lifetime.
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the current cursor offset, always in `0..=size()`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of elements left to read before exhaustion.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Returns true once the cursor has reached the end of the buffer.
    /// Only [`reset`](Self::reset) moves a stream out of this state.
    pub fn is_exhausted(&self) -> bool {
        self.position == self.buffer.len()
    }

    /// Reads up to `dest.len()` elements into `dest`, advancing the cursor.
    ///
    /// Copies `min(dest.len(), remaining())` elements in sequence order into
    /// the front of `dest` and returns that count. A return value smaller
    /// than `dest.len()` is a short read; 0 for a non-empty `dest` means the
    /// stream is exhausted. An empty `dest` is a no-op returning 0.
    ///
    /// The destination slice carries its own capacity, so no count argument
    /// can overrun it.
    pub fn read(&mut self, dest: &mut [i32]) -> usize {
        let n = dest.len().min(self.remaining());
        dest[..n].copy_from_slice(&self.buffer[self.position..self.position + n]);
        self.position += n;
        n
    }

    /// Moves the cursor back to the start of the buffer.
    ///
    /// After a reset, a full read reproduces the same values as the first
    /// read after construction.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Consumes the stream, returning an iterator over its remaining values
    /// that refills an internal buffer of `chunk_len` elements per read.
    ///
    /// A `chunk_len` of 0 is rounded up to 1.
    pub fn chunks(self, chunk_len: usize) -> ChunkedValues {
        ChunkedValues::new(self, chunk_len)
    }
}
