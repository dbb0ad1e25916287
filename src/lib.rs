//! # seqstream
//!
//! A small library for streaming an in-memory integer sequence in chunks.
//!
//! ## Overview
//!
//! `seqstream` provides an owned, fixed-length sequence of integers
//! `0..n` behind a read cursor, plus the machinery to hand such streams
//! across an opaque boundary safely. The core type, [`SequenceStream`],
//! supports bounded chunked reads into caller-provided slices, cursor
//! observers, and a reset that restores the stream to its freshly
//! constructed state. A [`StreamRegistry`] maps integer handles to owned
//! streams and validates every access, turning the classic
//! raw-pointer-handle hazards (use after delete, oversized reads into
//! undersized buffers) into checked errors.
//!
//! ## Key Properties
//!
//! * **Bounded reads**: destinations are slices, so a read can never write
//!   past the caller's storage; short reads signal proximity to exhaustion
//! * **Deterministic contents**: a stream of length `n` always holds
//!   `0, 1, ..., n-1`, and a reset reproduces the sequence exactly
//! * **Validated handles**: registry IDs are never reused, and stale or
//!   foreign IDs fail with [`Error::InvalidHandle`] instead of aliasing
//! * **No hidden failure modes**: construction, observers, read, and reset
//!   on the core type are infallible; errors exist only at the handle
//!   boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use seqstream::{sum, Result, StreamRegistry};
//!
//! fn main() -> Result<()> {
//!     let mut registry = StreamRegistry::new();
//!     let id = registry.create(5);
//!
//!     // Drain the stream in chunks of 3.
//!     let mut chunk = [0i32; 3];
//!     let chunk_len = chunk.len();
//!     let mut drained = Vec::new();
//!     loop {
//!         let n = registry.read(id, &mut chunk, chunk_len)?;
//!         if n == 0 {
//!             break;
//!         }
//!         drained.extend_from_slice(&chunk[..n]);
//!     }
//!     assert_eq!(drained, vec![0, 1, 2, 3, 4]);
//!     assert_eq!(sum(&drained), 10);
//!
//!     // Rewind and the stream reads identically again.
//!     registry.reset(id)?;
//!     assert_eq!(registry.position(id)?, 0);
//!
//!     registry.destroy(id)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous and non-blocking over in-memory data.
//! Neither streams nor registries lock internally; each instance expects a
//! single logical owner, and callers that share one across threads must
//! impose external synchronization.

pub mod error;
pub mod iter;
pub mod registry;
pub mod stream;
pub mod sum;

// Re-export the main public API for user convenience.
pub use error::{Error, Result};
pub use iter::ChunkedValues;
pub use registry::{StreamId, StreamRegistry};
pub use stream::SequenceStream;
pub use sum::sum;
