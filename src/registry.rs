//! A validated handle registry for streams that cross an opaque boundary.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::stream::SequenceStream;

/// An opaque identifier for a live stream held by a [`StreamRegistry`].
///
/// IDs are issued by [`StreamRegistry::create`] and are never reused within
/// a registry's lifetime, so a stale ID fails with
/// [`Error::InvalidHandle`](crate::Error::InvalidHandle) instead of silently
/// aliasing a newer stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamId(u64);

impl StreamId {
    /// The raw numeric value, for display and cross-boundary interop.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owns streams on behalf of external callers and validates every access.
///
/// This is the safe counterpart of a raw-pointer handle surface: callers
/// hold integer IDs rather than references, and each operation first checks
/// that the ID still maps to a live stream. Misuse that a pointer interface
/// would leave undefined — a deleted or never-issued handle, a destination
/// too small for the requested count — is a checked error here, and no
/// operation is partially applied.
///
/// ```rust
/// use seqstream::{StreamRegistry, Result};
///
/// fn demo() -> Result<()> {
///     let mut registry = StreamRegistry::new();
///     let id = registry.create(5);
///
///     let mut chunk = [0i32; 3];
///     assert_eq!(registry.read(id, &mut chunk, 3)?, 3);
///     assert_eq!(chunk, [0, 1, 2]);
///     assert_eq!(registry.position(id)?, 3);
///
///     registry.destroy(id)?;
///     assert!(registry.size(id).is_err());
///     Ok(())
/// }
/// # demo().unwrap();
/// ```
///
/// A registry carries no internal locking. Callers exposing one to multiple
/// threads must impose external synchronization, for example by holding it
/// behind a mutex.
#[derive(Debug, Default)]
pub struct StreamRegistry {
    streams: HashMap<StreamId, SequenceStream>,
    next_id: u64,
}

impl StreamRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new stream of `len` integers `0..len` and returns its handle.
    pub fn create(&mut self, len: usize) -> StreamId {
        let id = StreamId(self.next_id);
        self.next_id += 1;
        self.streams.insert(id, SequenceStream::new(len));
        id
    }

    /// Destroys the stream behind `id`, releasing its buffer.
    ///
    /// Subsequent operations on the same ID, including a second `destroy`,
    /// fail with `InvalidHandle`.
    pub fn destroy(&mut self, id: StreamId) -> Result<()> {
        self.streams
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::invalid_handle(id))
    }

    /// Returns the total element count of the stream behind `id`.
    pub fn size(&self, id: StreamId) -> Result<usize> {
        Ok(self.get(id)?.size())
    }

    /// Returns the current cursor offset of the stream behind `id`.
    pub fn position(&self, id: StreamId) -> Result<usize> {
        Ok(self.get(id)?.position())
    }

    /// Reads up to `requested` elements from the stream behind `id` into the
    /// front of `dest`, returning the count actually read.
    ///
    /// Fails with `BufferTooSmall` before touching the stream when
    /// `requested` exceeds `dest.len()`. Otherwise behaves exactly like
    /// [`SequenceStream::read`] over the first `requested` slots of `dest`:
    /// the count is clamped to the stream's remaining elements and the
    /// cursor advances by the returned amount.
    pub fn read(&mut self, id: StreamId, dest: &mut [i32], requested: usize) -> Result<usize> {
        let stream = self
            .streams
            .get_mut(&id)
            .ok_or_else(|| Error::invalid_handle(id))?;
        if requested > dest.len() {
            return Err(Error::buffer_too_small(requested, dest.len()));
        }
        Ok(stream.read(&mut dest[..requested]))
    }

    /// Moves the cursor of the stream behind `id` back to the start.
    pub fn reset(&mut self, id: StreamId) -> Result<()> {
        let stream = self
            .streams
            .get_mut(&id)
            .ok_or_else(|| Error::invalid_handle(id))?;
        stream.reset();
        Ok(())
    }

    /// Returns the number of live streams.
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Returns true when no streams are live.
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    fn get(&self, id: StreamId) -> Result<&SequenceStream> {
        self.streams.get(&id).ok_or_else(|| Error::invalid_handle(id))
    }
}
