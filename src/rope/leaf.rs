use super::node::*;
use super::concat::*;
use super::content_hash::*;
use super::equality::*;

use bytes::Bytes;

use std::sync::*;

///
/// A leaf node wraps a single chunk of bytes
///
/// `Bytes` buffers are immutable, so a chunk can't change after it has been wrapped and the
/// cached hash stays valid for the lifetime of the leaf.
///
pub struct RopeLeaf {
    /// The bytes stored in this leaf
    chunk: Bytes,

    /// The content hash of the chunk, once it has been calculated
    hash: HashCache
}

impl RopeLeaf {
    ///
    /// Creates a new leaf node
    ///
    pub (super) fn new(chunk: Bytes) -> RopeLeaf {
        RopeLeaf {
            chunk:  chunk,
            hash:   HashCache::new()
        }
    }

    ///
    /// The chunk stored in this leaf
    ///
    #[inline]
    pub fn chunk(&self) -> &Bytes {
        &self.chunk
    }

    ///
    /// The number of bytes in this leaf
    ///
    #[inline]
    pub fn size(&self) -> usize {
        self.chunk.len()
    }

    ///
    /// Creates a new leaf from part of this one. The new chunk is a view of the same buffer.
    ///
    pub (super) fn subr(&self, start: usize, end: usize) -> Rope {
        Rope::wrap(self.chunk.slice(start..end))
    }

    pub (super) fn append(this: &Arc<RopeLeaf>, other: &Rope) -> Rope {
        RopeConcat::new(Rope::Leaf(Arc::clone(this)), other.clone())
    }

    pub (super) fn prepend(this: &Arc<RopeLeaf>, other: &Rope) -> Rope {
        RopeConcat::new(other.clone(), Rope::Leaf(Arc::clone(this)))
    }

    ///
    /// Polynomial hash of the bytes in this chunk
    ///
    pub (super) fn content_hash(&self) -> u32 {
        self.hash.get_or_compute(|| hash_bytes(HASH_SEED, &self.chunk))
    }

    #[inline]
    pub (super) fn cached_hash(&self) -> Option<u32> {
        self.hash.get()
    }

    ///
    /// Compares this chunk against the chunks of another rope of the same size
    ///
    pub (super) fn content_eq(&self, other: &Rope) -> bool {
        chunks_eq_slice(other, &self.chunk)
    }
}
