use super::node::*;
use super::content_hash::*;

use std::sync::*;

///
/// Represents a point where a rope is made of two smaller ropes
///
/// Neither side of a concat node is ever empty.
///
pub struct RopeConcat {
    /// The left-hand side of the rope (first part of the bytes)
    left: Rope,

    /// The right-hand side of the rope
    right: Rope,

    /// The total length of all the chunks under this node
    size: usize,

    /// The number of chunks under this node
    count: usize,

    /// The depth of the tree under this node
    depth: usize,

    /// The content hash of this node, once it has been calculated
    hash: HashCache
}

impl RopeConcat {
    ///
    /// Joins two non-empty ropes without any re-association
    ///
    /// Panics with 'rope size overflow' if the combined size can't be represented as a `usize`
    ///
    pub (super) fn new(left: Rope, right: Rope) -> Rope {
        debug_assert!(!left.is_empty(), "Concat nodes cannot have an empty left-hand side");
        debug_assert!(!right.is_empty(), "Concat nodes cannot have an empty right-hand side");

        // Shared subtrees can describe more bytes than a usize can count
        let size    = match left.size().checked_add(right.size()) {
            Some(size)  => size,
            None        => panic!("rope size overflow: {} + {} bytes", left.size(), right.size())
        };
        let count   = match left.count().checked_add(right.count()) {
            Some(count) => count,
            None        => panic!("rope chunk count overflow: {} + {} chunks", left.count(), right.count())
        };
        let depth   = left.depth().max(right.depth()) + 1;

        Rope::Concat(Arc::new(RopeConcat {
            left:   left,
            right:  right,
            size:   size,
            count:  count,
            depth:  depth,
            hash:   HashCache::new()
        }))
    }

    /// The first part of this rope
    #[inline]
    pub fn left(&self) -> &Rope { &self.left }

    /// The second part of this rope
    #[inline]
    pub fn right(&self) -> &Rope { &self.right }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    #[inline]
    pub fn count(&self) -> usize { self.count }

    #[inline]
    pub fn depth(&self) -> usize { self.depth }

    ///
    /// Slices a range that does not cover the whole of this node
    ///
    pub (super) fn subr(&self, start: usize, end: usize) -> Rope {
        let split_point = self.left.size();

        if end <= split_point {
            // Entirely within the left-hand side
            self.left.subr_unchecked(start, end)
        } else if start >= split_point {
            // Entirely within the right-hand side
            self.right.subr_unchecked(start - split_point, end - split_point)
        } else {
            // Straddles both sides: neither part can be empty here
            let left_part   = self.left.subr_unchecked(start, split_point);
            let right_part  = self.right.subr_unchecked(0, end - split_point);

            Rope::join(&left_part, &right_part)
        }
    }

    ///
    /// Appends a non-empty rope to this one, folding small pieces in next to the right-hand side
    /// rather than stacking a new node on top
    ///
    pub (super) fn append(this: &Arc<RopeConcat>, other: &Rope) -> Rope {
        if other.size() < this.left.size() {
            tracing::trace!(left = this.left.size(), right = this.right.size(), appended = other.size(), "Re-associating append");
            Rope::join(&this.left, &Rope::join(&this.right, other))
        } else {
            RopeConcat::new(Rope::Concat(Arc::clone(this)), other.clone())
        }
    }

    ///
    /// Prepends a non-empty rope to this one, the mirror image of `append`
    ///
    pub (super) fn prepend(this: &Arc<RopeConcat>, other: &Rope) -> Rope {
        if other.size() < this.right.size() {
            tracing::trace!(left = this.left.size(), right = this.right.size(), prepended = other.size(), "Re-associating prepend");
            Rope::join(&Rope::join(other, &this.left), &this.right)
        } else {
            RopeConcat::new(other.clone(), Rope::Concat(Arc::clone(this)))
        }
    }

    ///
    /// The hash of the left-hand side, continued over the bytes of the right-hand side
    ///
    pub (super) fn content_hash(&self) -> u32 {
        self.hash.get_or_compute(|| {
            let hash = continue_hash(self.left.content_hash(), self.right.size(), self.right.content_hash());
            tracing::trace!(size = self.size, count = self.count, hash, "Calculated concat hash");

            hash
        })
    }

    #[inline]
    pub (super) fn cached_hash(&self) -> Option<u32> {
        self.hash.get()
    }

    ///
    /// Compares against another rope of the same size by slicing it at the same point as this node
    ///
    pub (super) fn content_eq(&self, other: &Rope) -> bool {
        let split_point = self.left.size();

        self.left == other.subr_unchecked(0, split_point)
            && self.right == other.subr_unchecked(split_point, self.size)
    }
}
