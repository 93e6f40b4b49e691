//!
//! `chunk_rope` is a persistent, immutable rope of byte chunks.
//!
//! A rope represents a sequence of bytes as a binary tree of chunks. This makes joining two
//! ropes a near constant-time operation, and slicing a rope logarithmic, because neither
//! copies the bytes themselves: new ropes share the nodes of the ropes they were built from.
//! This suits buffers that are assembled from many pieces, such as network payloads, logs or
//! the contents of a document being edited.
//!
//!  * Chunks are `bytes::Bytes` buffers, so they're cheap to share and can't change after
//!    they're wrapped
//!  * Ropes compare and hash by content: two ropes built in a different order but containing
//!    the same bytes are equal and have the same hash
//!  * The chunks in a rope can be iterated over or folded (with early termination) through the
//!    `ChunkSequence` and `Reducible` traits
//!
//! The tree isn't fully rebalanced, but joins attach new pieces to the larger side of the
//! existing tree, which keeps its depth logarithmic under repeated small appends.
//!
//! ## Examples
//!
//! Joining and slicing ropes
//!
//! ```
//! use chunk_rope::*;
//!
//! let rope = Rope::wrap("hello").append(&Rope::wrap("world"));
//!
//! assert!(rope.size() == 10);
//! assert!(rope.subr(3, 8)? == "lowor");
//! assert!(rope.subr(0, 10)?.ptr_eq(&rope));
//! # Ok::<(), RopeError>(())
//! ```
//!
//! Folding over the chunks of a rope
//!
//! ```
//! use chunk_rope::*;
//!
//! let rope    = Rope::wrap("a").append(&Rope::wrap("bb")).append(&Rope::wrap("ccc"));
//! let lengths = rope.reduce_with(vec![], |mut lengths, chunk| {
//!     lengths.push(chunk.len());
//!     Reduction::Continue(lengths)
//! });
//!
//! assert!(lengths == vec![1, 2, 3]);
//! ```

pub mod api;
pub mod rope;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use crate::api::*;
pub use crate::rope::*;
