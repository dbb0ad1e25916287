//! Chunked value iteration over a sequence stream.

use crate::stream::SequenceStream;

/// An iterator over a stream's values, loaded a chunk at a time.
///
/// Created by [`SequenceStream::chunks`]. The iterator owns the stream and a
/// reusable buffer; whenever the buffer runs dry it issues one more read and
/// continues from the front. Iteration ends on the first read that returns 0,
/// so the yielded values are exactly what a single full read would produce,
/// independent of the chunk size.
///
/// ```rust
/// use seqstream::SequenceStream;
///
/// let values: Vec<i32> = SequenceStream::new(7).chunks(3).collect();
/// assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6]);
/// ```
pub struct ChunkedValues {
    stream: SequenceStream,
    buffer: Vec<i32>,
    loaded: usize,
    cursor: usize,
}

impl ChunkedValues {
    pub(crate) fn new(stream: SequenceStream, chunk_len: usize) -> Self {
        let chunk_len = chunk_len.max(1);
        Self {
            stream,
            buffer: vec![0; chunk_len],
            loaded: 0,
            cursor: 0,
        }
    }

    /// Consumes the iterator, returning the underlying stream with its
    /// cursor wherever iteration left it.
    pub fn into_inner(self) -> SequenceStream {
        self.stream
    }
}

impl Iterator for ChunkedValues {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.cursor == self.loaded {
            self.loaded = self.stream.read(&mut self.buffer);
            self.cursor = 0;
            if self.loaded == 0 {
                return None;
            }
        }
        let value = self.buffer[self.cursor];
        self.cursor += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = (self.loaded - self.cursor) + self.stream.remaining();
        (pending, Some(pending))
    }
}

impl ExactSizeIterator for ChunkedValues {}

impl std::iter::FusedIterator for ChunkedValues {}
