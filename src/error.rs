use thiserror::Error;

use crate::registry::StreamId;

/// Custom error types for the seqstream library.
///
/// The stream operations themselves cannot fail; every error here arises at
/// the handle boundary, where callers identify streams by opaque IDs and
/// supply their own destination storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operation invoked on a handle that does not correspond to a live
    /// stream, either because it was never issued by this registry or because
    /// the stream behind it has already been destroyed.
    #[error("invalid handle: no live stream for id {id}")]
    InvalidHandle { id: u64 },

    /// Caller-supplied destination cannot hold the requested element count.
    /// The operation is rejected before any cursor movement.
    #[error("destination buffer too small: requested {requested} elements, capacity {capacity}")]
    BufferTooSmall { requested: usize, capacity: usize },
}

impl Error {
    /// Create a new `InvalidHandle` error for the given stream ID.
    pub fn invalid_handle(id: StreamId) -> Self {
        Self::InvalidHandle { id: id.raw() }
    }

    /// Create a new `BufferTooSmall` error with the requested count and the
    /// actual destination capacity.
    pub fn buffer_too_small(requested: usize, capacity: usize) -> Self {
        Self::BufferTooSmall {
            requested,
            capacity,
        }
    }
}

/// Result type alias for the library operations.
pub type Result<T> = std::result::Result<T, Error>;
