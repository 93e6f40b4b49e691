use super::leaf::*;
use super::concat::*;

use crate::api::*;

use bytes::Bytes;

use std::fmt;
use std::sync::*;
use std::ops::{Bound, RangeBounds};

/// The number of bytes of content shown when formatting a rope for debugging
const DEBUG_PREVIEW_LENGTH: usize = 32;

///
/// A persistent, immutable rope of byte chunks
///
/// A rope is either a single chunk (`Leaf`) or two ropes joined together (`Concat`). Every
/// operation that looks like it changes a rope produces a new one instead: the nodes of the
/// original rope are shared with the result, so cloning, appending and slicing never copy
/// the bytes themselves.
///
/// Ropes compare equal when their contents are equal, no matter how their trees are shaped.
///
#[derive(Clone)]
pub enum Rope {
    /// A single contiguous chunk of bytes
    Leaf(Arc<RopeLeaf>),

    /// Two non-empty ropes joined together, left then right
    Concat(Arc<RopeConcat>)
}

impl Rope {
    ///
    /// Creates a rope that wraps a single chunk of bytes
    ///
    pub fn wrap<Chunk: Into<Bytes>>(chunk: Chunk) -> Rope {
        Rope::Leaf(Arc::new(RopeLeaf::new(chunk.into())))
    }

    ///
    /// Creates a rope containing no bytes
    ///
    pub fn empty() -> Rope {
        Rope::wrap(Bytes::new())
    }

    ///
    /// The total number of bytes in this rope
    ///
    #[inline]
    pub fn size(&self) -> usize {
        match self {
            Rope::Leaf(leaf)        => leaf.size(),
            Rope::Concat(concat)    => concat.size()
        }
    }

    ///
    /// True if this rope contains no bytes
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    ///
    /// The number of chunks in this rope
    ///
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            Rope::Leaf(_)           => 1,
            Rope::Concat(concat)    => concat.count()
        }
    }

    ///
    /// The depth of the tree representing this rope (a single leaf has a depth of 1)
    ///
    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            Rope::Leaf(_)           => 1,
            Rope::Concat(concat)    => concat.depth()
        }
    }

    ///
    /// True if two ropes are the same node (rather than just having the same content)
    ///
    pub fn ptr_eq(&self, other: &Rope) -> bool {
        match (self, other) {
            (Rope::Leaf(a), Rope::Leaf(b))      => Arc::ptr_eq(a, b),
            (Rope::Concat(a), Rope::Concat(b))  => Arc::ptr_eq(a, b),
            _                                   => false
        }
    }

    ///
    /// Returns the bytes in the range `start..end` as a new rope
    ///
    /// Slicing the whole rope returns this rope unchanged. Otherwise the result shares as much
    /// of the existing tree as possible, only splitting the chunks at either end of the range.
    ///
    pub fn subr(&self, start: usize, end: usize) -> Result<Rope, RopeError> {
        let size = self.size();

        if start > end {
            tracing::debug!(start, end, size, "Rejected slice with reversed bounds");
            Err(RopeError::InvalidRange { start, end })
        } else if end > size {
            tracing::debug!(start, end, size, "Rejected slice past the end of the rope");
            Err(RopeError::OutOfBounds { start, end, size })
        } else {
            Ok(self.subr_unchecked(start, end))
        }
    }

    ///
    /// Returns a slice of this rope using range syntax (`rope.slice(3..8)`, `rope.slice(..)`)
    ///
    /// A bound one past `usize::MAX` (`Excluded(usize::MAX)` as a start, `Included(usize::MAX)`
    /// as an end) is always past the end of the rope, and is reported as `OutOfBounds`.
    ///
    pub fn slice<Range: RangeBounds<usize>>(&self, range: Range) -> Result<Rope, RopeError> {
        let size = self.size();

        let end = match range.end_bound() {
            Bound::Included(end)    => end.checked_add(1),
            Bound::Excluded(end)    => Some(*end),
            Bound::Unbounded        => Some(size)
        };
        let start = match range.start_bound() {
            Bound::Included(start)  => Some(*start),
            Bound::Excluded(start)  => start.checked_add(1),
            Bound::Unbounded        => Some(0)
        };

        match (start, end) {
            (Some(start), Some(end))    => self.subr(start, end),
            (start, end)                => {
                let start   = start.unwrap_or(usize::MAX);
                let end     = end.unwrap_or(usize::MAX);

                tracing::debug!(start, end, size, "Rejected slice bound past usize::MAX");
                Err(RopeError::OutOfBounds { start, end, size })
            }
        }
    }

    ///
    /// Slices a range that is already known to be within this rope
    ///
    pub (crate) fn subr_unchecked(&self, start: usize, end: usize) -> Rope {
        debug_assert!(start <= end);
        debug_assert!(end <= self.size());

        if start == 0 && end == self.size() {
            // Covers the whole rope, so there's nothing to copy
            self.clone()
        } else {
            match self {
                Rope::Leaf(leaf)        => leaf.subr(start, end),
                Rope::Concat(concat)    => concat.subr(start, end)
            }
        }
    }

    ///
    /// Returns a rope with the contents of this rope followed by the contents of another
    ///
    pub fn append(&self, other: &Rope) -> Rope {
        if other.is_empty() {
            self.clone()
        } else if self.is_empty() {
            other.clone()
        } else {
            match self {
                Rope::Leaf(leaf)        => RopeLeaf::append(leaf, other),
                Rope::Concat(concat)    => RopeConcat::append(concat, other)
            }
        }
    }

    ///
    /// Returns a rope with the contents of another rope followed by the contents of this one
    ///
    pub fn prepend(&self, other: &Rope) -> Rope {
        if other.is_empty() {
            self.clone()
        } else if self.is_empty() {
            other.clone()
        } else {
            match self {
                Rope::Leaf(leaf)        => RopeLeaf::prepend(leaf, other),
                Rope::Concat(concat)    => RopeConcat::prepend(concat, other)
            }
        }
    }

    ///
    /// Joins two ropes, left then right
    ///
    /// The new piece is attached on the side of whichever rope is larger, which keeps the tree
    /// shallow under repeated small concatenations without needing a full rebalancing pass.
    ///
    pub fn join(left: &Rope, right: &Rope) -> Rope {
        if left.size() > right.size() {
            left.append(right)
        } else {
            right.prepend(left)
        }
    }

    ///
    /// Returns the byte at the specified index, or `None` if it's past the end of the rope
    ///
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        let mut node    = self;
        let mut index   = index;

        loop {
            match node {
                Rope::Leaf(leaf) => {
                    return leaf.chunk().get(index).copied();
                }

                Rope::Concat(concat) => {
                    let left_size = concat.left().size();

                    if index < left_size {
                        node    = concat.left();
                    } else {
                        index   -= left_size;
                        node    = concat.right();
                    }
                }
            }
        }
    }
}

impl Default for Rope {
    fn default() -> Rope {
        Rope::empty()
    }
}

impl fmt::Debug for Rope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Slicing first means only the chunks at the start of the rope are flattened
        let preview = self.subr_unchecked(0, self.size().min(DEBUG_PREVIEW_LENGTH))
            .to_vec();

        f.debug_struct("Rope")
            .field("size", &self.size())
            .field("count", &self.count())
            .field("depth", &self.depth())
            .field("content", &Bytes::from(preview))
            .finish()
    }
}
